/// Allows any sized value to be moved into a [Result](std::result::Result) without wrapping it in
/// an explicit `Ok()` or `Err()` call.  Reads better at the end of long builder chains.
pub trait ResultExtensions
where
    Self: Sized,
{
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}
