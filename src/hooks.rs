/// API fetch state enum
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started() {
        let state: FetchState<i32> = FetchState::default();
        assert_eq!(state, FetchState::NotStarted);
        assert!(state.data().is_none());
    }

    #[test]
    fn success_exposes_data() {
        let state = FetchState::Success(42);
        assert!(state.is_success());
        assert_eq!(state.data(), Some(&42));
        assert!(state.error().is_none());
    }

    #[test]
    fn non_success_states_hold_no_data() {
        let loading: FetchState<i32> = FetchState::Loading;
        let error: FetchState<i32> = FetchState::Error("boom".to_string());

        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        assert!(error.is_error());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some(&"boom".to_string()));
    }
}
