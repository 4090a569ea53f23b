use crate::Error;

pub trait Context<T, E> {
    fn context(self, context: impl ToString) -> Result<T, Error<E>>;
}

impl<T, E> Context<T, E> for Result<T, E> {
    fn context(self, context: impl ToString) -> Result<T, Error<E>> {
        self.map_err(|e| Error::new(context, e))
    }
}
