use crate::domain::model::Pet;
use crate::utils::error::Result;

/// Line-oriented terminal.
pub trait Console {
    /// Writes `message` without a trailing newline and reads one line.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    fn say(&mut self, line: &str) -> Result<()>;
}

pub trait PetRepository {
    fn append(&mut self, pet: Pet);

    /// Contents in insertion order.
    fn all(&self) -> &[Pet];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

pub trait ConfigProvider {
    fn log_level(&self) -> &str;
    fn json_logs(&self) -> bool;
}
