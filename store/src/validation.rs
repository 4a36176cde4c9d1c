/// Common validation trait for user-supplied input.
///
/// Validators are small stateless types; the input type may be unsized
/// (`str`, `Path`) so callers can validate borrowed data without copying.
///
/// # Examples
///
/// ```
/// use store::validation::Validator;
///
/// struct NotBlank;
/// impl Validator<str> for NotBlank {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.trim().is_empty() {
///             Err("value cannot be blank".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Returns `Ok(())` when the input is acceptable.
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
