use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be empty. Please enter a valid message.")]
    Empty,
}

pub fn validate_input(input: &str) -> Result<(), InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(())
}
