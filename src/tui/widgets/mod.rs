pub mod input_buffer;
pub mod text_input;
