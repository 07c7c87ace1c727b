/// Grants a human-readable label used when the object is listed in a selector.
pub trait Displayable {
    /// Label shown to the user for this object.
    fn display(&self) -> String;
}

impl<T: Displayable + ?Sized> Displayable for &T {
    fn display(&self) -> String {
        (**self).display()
    }
}
