use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("locale `{0}` not registered")]
    LocaleNotRegistered(String),
}
