// One error type for the whole program.
// Every variant states *where* things went wrong.
// Placement and rendering never fail; only the window and the config can.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Config error: {0}")]
    Config(String), // A setting can't produce a sensible eye field
}
