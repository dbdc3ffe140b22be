use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Cannot tell the day of '{0}': no enclosing directory is named like 'day07'")]
    DayNotResolved(PathBuf),

    #[error("Day {day} is out of range: the status file holds {slots} days")]
    DayOutOfRange { day: u8, slots: usize },
}
