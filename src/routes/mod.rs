pub mod home;
pub use home::*;

pub mod send;
pub use send::*;

pub mod backup;
pub use backup::*;

pub mod settings;
pub use settings::*;

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Route {
    #[default]
    Home,
    Send,
    Backup,
    Settings,
}

impl Route {
    /// Router path for the page, `/$/<page>`.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Send => "/$/send",
            Route::Backup => "/$/backup",
            Route::Settings => "/$/settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [Route::Home, Route::Send, Route::Backup, Route::Settings]
            .into_iter()
            .find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        assert_eq!(Route::Send.path(), "/$/send");
        assert_eq!(Route::Backup.path(), "/$/backup");
        assert_eq!(Route::from_path("/$/settings"), Some(Route::Settings));
        assert_eq!(Route::from_path("/$/nope"), None);
    }
}
