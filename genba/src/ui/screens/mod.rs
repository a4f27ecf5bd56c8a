pub mod logs_screen;
pub mod slip_screen;

use crate::state::LogsState;

#[derive(Debug, Clone)]
pub enum Screen {
    Slip,
    Logs(LogsState),
}
