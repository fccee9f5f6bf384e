use serde::ser::{Serialize, SerializeStruct, Serializer};

const GENERIC_FAILURE_MESSAGE: &str = "Transcription failed";

/// Classification of a failed pipeline operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    ValidationFailed,
    UnknownEngine,
    EngineUnavailable,
    EngineExecutionFailed,
    ResourceIoFailed,
}

/// Uniform result of every pipeline operation.
///
/// `errors` is empty exactly when the operation succeeded, and `data` is only
/// ever populated on success. The two constructors are the only way to build
/// one, which keeps that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    data: Option<T>,
    errors: Vec<String>,
    failure: Option<FailureKind>,
}

impl<T> ResultEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
            failure: None,
        }
    }

    pub fn failure(kind: FailureKind, errors: Vec<String>) -> Self {
        let mut errors = errors;
        if errors.is_empty() {
            errors.push(GENERIC_FAILURE_MESSAGE.to_string());
        }
        Self {
            data: None,
            errors,
            failure: Some(kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure
    }

    pub fn joined(&self, separator: &str) -> String {
        self.errors.join(separator)
    }
}

impl<T: Serialize> Serialize for ResultEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultEnvelope", 3)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.end()
    }
}
