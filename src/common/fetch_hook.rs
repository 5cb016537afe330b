use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::common::toast::ToastKind;
use crate::hooks::FetchState;

/// Liveness token tied to a component's mount lifecycle.
///
/// The fetch effect hands a clone to the in-flight future and revokes the
/// token from its cleanup closure, so a response arriving after unmount is
/// dropped instead of mutating state on a defunct component.
#[derive(Clone)]
pub struct FetchGuard(Rc<Cell<bool>>);

impl FetchGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a settled fetch result to component state.
///
/// Invariants: a revoked guard means neither `apply` nor `report` runs; a
/// successful result never reports; a failed result applies the error state
/// and reports exactly once.
fn settle<T>(
    guard: &FetchGuard,
    result: Result<T, String>,
    apply: impl FnOnce(FetchState<T>),
    report: impl FnOnce(String),
) {
    if !guard.is_live() {
        log::debug!("Fetch settled after unmount, dropping response");
        return;
    }

    match result {
        Ok(data) => apply(FetchState::Success(data)),
        Err(err) => {
            apply(FetchState::Error(err.clone()));
            report(err);
        }
    }
}

/// One-shot mount-time fetch.
///
/// Issues `fetch_fn` exactly once per mount (the effect is keyed on `()`,
/// so re-renders never refetch) and resolves it into the returned
/// `FetchState`. Failures of any kind go through `on_report` with
/// `ToastKind::Error`; there is no retry.
#[hook]
pub fn use_fetch_once<T, F, Fut>(
    fetch_fn: F,
    on_report: Callback<(String, ToastKind)>,
) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            let guard = FetchGuard::new();
            let cleanup_guard = guard.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_fn().await;
                settle(
                    &guard,
                    result,
                    |state| fetch_state.set(state),
                    |err| on_report.emit((err, ToastKind::Error)),
                );
            });

            move || cleanup_guard.revoke()
        });
    }

    fetch_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn success_applies_state_without_reporting() {
        let guard = FetchGuard::new();
        let applied = RefCell::new(None);
        let reports = RefCell::new(Vec::new());

        settle(
            &guard,
            Ok(7),
            |state| *applied.borrow_mut() = Some(state),
            |err| reports.borrow_mut().push(err),
        );

        assert_eq!(*applied.borrow(), Some(FetchState::Success(7)));
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn failure_reports_exactly_once_and_holds_no_data() {
        let guard = FetchGuard::new();
        let applied = RefCell::new(None);
        let reports = RefCell::new(Vec::new());

        settle(
            &guard,
            Err::<i32, _>("boom".to_string()),
            |state| *applied.borrow_mut() = Some(state),
            |err| reports.borrow_mut().push(err),
        );

        let state = applied.borrow_mut().take().unwrap();
        assert!(state.is_error());
        assert!(state.data().is_none());
        assert_eq!(*reports.borrow(), vec!["boom".to_string()]);
    }

    #[test]
    fn revoked_guard_drops_the_response() {
        let guard = FetchGuard::new();
        let in_flight = guard.clone();
        guard.revoke();

        let applied = RefCell::new(None);
        let reports = RefCell::new(Vec::new());

        settle(
            &in_flight,
            Ok(7),
            |state| *applied.borrow_mut() = Some(state),
            |err| reports.borrow_mut().push(err),
        );
        settle(
            &in_flight,
            Err::<i32, _>("late failure".to_string()),
            |state| *applied.borrow_mut() = Some(state),
            |err| reports.borrow_mut().push(err),
        );

        assert!(applied.borrow().is_none());
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn guard_clones_share_liveness() {
        let guard = FetchGuard::new();
        let clone = guard.clone();
        assert!(clone.is_live());
        guard.revoke();
        assert!(!clone.is_live());
    }
}
