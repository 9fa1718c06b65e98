use http::Extensions;

/// Typed per-exchange attributes handed to result building.
///
/// A driver can attach processing state to the exchange (remote address,
/// authentication outcome, timing data) and a consumer reads it back while
/// building its result. Keys are types, so independent components cannot
/// collide on attribute names.
#[derive(Debug, Default)]
pub struct ConsumeContext {
    attributes: Extensions,
}

impl ConsumeContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, returning the previous value of the same type if any.
    pub fn insert<T: Clone + Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.attributes.insert(value)
    }

    /// Returns a reference to the attribute of type `T` if present.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.attributes.get()
    }

    /// Removes and returns the attribute of type `T` if present.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.attributes.remove()
    }
}
