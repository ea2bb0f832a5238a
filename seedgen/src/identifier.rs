use uuid::Uuid;

/// Supplies a name for results that were not given an explicit label.
pub trait IdentifierGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 names, unique for all practical purposes.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdentifierGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdentifierGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}
