mod openai_whisper_engine_test;
mod wav_test;
