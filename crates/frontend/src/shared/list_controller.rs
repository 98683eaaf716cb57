//! Load → filter → mutate → reload cycle shared by every list screen.
//!
//! A screen owns one [`ListState`] (normally inside an `RwSignal`) and drives
//! it through a [`ListController`]. The collection is only ever replaced
//! wholesale by a completed `load()`; mutations never patch it locally.
//! Every failure ends at the operation boundary as a notification.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::{DeleteGuard, EntityRecord};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_filter::{filter_items, FilterState, Searchable};
use contracts::shared::validation::Validate;

use super::toast::{use_toasts, ToastService};

// ============================================================================
// Seams
// ============================================================================

/// Read side of an entity's REST collection.
#[async_trait(?Send)]
pub trait ListSource {
    type Item: Clone + 'static;

    async fn list(&self) -> Result<Vec<Self::Item>, ApiError>;
}

/// Full CRUD surface of an entity's REST collection.
#[async_trait(?Send)]
pub trait CrudApi: ListSource {
    type Input: Validate + 'static;

    async fn create(&self, input: &Self::Input) -> Result<(), ApiError>;
    async fn update(&self, id: &str, input: &Self::Input) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Non-blocking user feedback.
pub trait Notifier {
    fn success(&self, message: String);
    fn error(&self, message: String);
}

/// Explicit yes/no from the user before a destructive call.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// Where a screen keeps its [`ListState`].
pub trait ListStore<T> {
    fn modify(&self, f: impl FnOnce(&mut ListState<T>));
    fn inspect<R>(&self, f: impl FnOnce(&ListState<T>) -> R) -> R;
}

impl<T: Send + Sync + 'static> ListStore<T> for RwSignal<ListState<T>> {
    fn modify(&self, f: impl FnOnce(&mut ListState<T>)) {
        self.update(f);
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListState<T>) -> R) -> R {
        self.with_untracked(f)
    }
}

impl<T> ListStore<T> for Rc<RefCell<ListState<T>>> {
    fn modify(&self, f: impl FnOnce(&mut ListState<T>)) {
        f(&mut self.borrow_mut());
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListState<T>) -> R) -> R {
        f(&self.borrow())
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    /// A `load()` is in flight.
    pub loading: bool,
    /// Number of create/update/delete calls in flight.
    pub in_flight: usize,
    /// At least one `load()` has finished.
    pub loaded: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            in_flight: 0,
            loaded: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.is_pending()
    }
}

impl<T: Searchable + Clone> ListState<T> {
    /// Filtered view of the cached collection.
    pub fn filtered(&self, filter: &FilterState, locale: &str) -> Vec<T> {
        filter_items(&self.items, filter, locale)
    }
}

/// Entity-specific notification texts of one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMessages {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

impl ListMessages {
    /// Texts for a list that is only ever loaded.
    pub const fn read_only(load_failed: &'static str) -> Self {
        Self {
            load_failed,
            created: "",
            create_failed: "",
            updated: "",
            update_failed: "",
            deleted: "",
            delete_failed: "",
            confirm_delete: "",
        }
    }
}

/// How a create/update/delete attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Call succeeded and the list was reloaded.
    Completed,
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// The API call failed; the list is unchanged.
    Failed,
    /// The user declined the confirmation.
    Cancelled,
    /// A precondition forbids the action (e.g. dependent children).
    Blocked,
}

impl MutationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, MutationOutcome::Completed)
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Clone, Copy)]
pub struct ListController<A, N, S> {
    api: A,
    notifier: N,
    store: S,
    messages: ListMessages,
}

impl<A, N, S> ListController<A, N, S>
where
    A: ListSource,
    N: Notifier,
    S: ListStore<A::Item>,
{
    pub fn new(api: A, notifier: N, store: S, messages: ListMessages) -> Self {
        Self {
            api,
            notifier,
            store,
            messages,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// For form errors caught before a DTO can even be built.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the collection and replace the cached copy.
    ///
    /// On failure the collection is emptied and the error is reported;
    /// there is no retry. Returns `true` on success.
    pub async fn load(&self) -> bool {
        self.store.modify(|s| s.loading = true);
        match self.api.list().await {
            Ok(items) => {
                log::debug!("loaded {} item(s)", items.len());
                self.store.modify(|s| {
                    s.items = items;
                    s.loading = false;
                    s.loaded = true;
                });
                true
            }
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.store.modify(|s| {
                    s.items.clear();
                    s.loading = false;
                    s.loaded = true;
                });
                self.notifier.error(err.user_message(self.messages.load_failed));
                false
            }
        }
    }
}

impl<A, N, S> ListController<A, N, S>
where
    A: CrudApi,
    A::Item: EntityRecord + DeleteGuard,
    N: Notifier,
    S: ListStore<A::Item>,
{
    pub async fn create(&self, input: &A::Input) -> MutationOutcome {
        if let Err(message) = input.validate() {
            self.notifier.error(message);
            return MutationOutcome::Invalid;
        }
        self.mutate(self.api.create(input), self.messages.created, self.messages.create_failed)
            .await
    }

    pub async fn update(&self, id: &str, input: &A::Input) -> MutationOutcome {
        if let Err(message) = input.validate() {
            self.notifier.error(message);
            return MutationOutcome::Invalid;
        }
        self.mutate(self.api.update(id, input), self.messages.updated, self.messages.update_failed)
            .await
    }

    /// Delete after the guard and the user's confirmation allow it.
    pub async fn delete(&self, id: &str, confirmer: &impl Confirmer) -> MutationOutcome {
        if let Some(reason) = self.delete_blocker(id) {
            log::debug!("delete of {} blocked: {}", id, reason);
            return MutationOutcome::Blocked;
        }
        if !confirmer.confirm(self.messages.confirm_delete) {
            return MutationOutcome::Cancelled;
        }
        self.mutate(self.api.delete(id), self.messages.deleted, self.messages.delete_failed)
            .await
    }

    /// Reason the cached record `id` cannot be deleted, if any.
    pub fn delete_blocker(&self, id: &str) -> Option<String> {
        self.store.inspect(|s| {
            s.items
                .iter()
                .find(|item| item.id() == id)
                .and_then(|item| item.delete_blocker())
        })
    }

    async fn mutate(
        &self,
        call: impl Future<Output = Result<(), ApiError>>,
        success: &'static str,
        fallback: &'static str,
    ) -> MutationOutcome {
        self.store.modify(|s| s.in_flight += 1);
        let result = call.await;
        self.store.modify(|s| s.in_flight = s.in_flight.saturating_sub(1));

        match result {
            Ok(()) => {
                self.notifier.success(success.to_string());
                self.load().await;
                MutationOutcome::Completed
            }
            Err(err) => {
                log::warn!("{} {}", fallback, err);
                self.notifier.error(err.user_message(fallback));
                MutationOutcome::Failed
            }
        }
    }
}

/// Controller of a mounted screen: toasts for feedback, a signal for state.
pub type ScreenController<A> =
    ListController<A, ToastService, RwSignal<ListState<<A as ListSource>::Item>>>;

/// Build a [`ScreenController`] for `api` inside the current component.
pub fn use_list_controller<A>(api: A, messages: ListMessages) -> ScreenController<A>
where
    A: ListSource,
    A::Item: Send + Sync,
{
    ListController::new(api, use_toasts(), RwSignal::new(ListState::default()), messages)
}

/// Start `load()` without waiting for it.
pub fn spawn_load<A>(controller: ScreenController<A>)
where
    A: ListSource + Copy + 'static,
    A::Item: Send + Sync,
{
    spawn_local(async move {
        controller.load().await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_department_section::{DepartmentSection, DepartmentSectionDto};
    use contracts::shared::localized::LocalizedText;
    use futures::executor::block_on;
    use std::cell::Cell;

    const MESSAGES: ListMessages = ListMessages {
        load_failed: "Failed to load sections",
        created: "Section created",
        create_failed: "Failed to create section",
        updated: "Section updated",
        update_failed: "Failed to update section",
        deleted: "Section deleted",
        delete_failed: "Failed to delete section",
        confirm_delete: "Delete this section?",
    };

    #[derive(Default)]
    struct MockApi {
        rows: RefCell<Vec<DepartmentSection>>,
        calls: RefCell<Vec<String>>,
        next_id: Cell<u32>,
        fail_list: Cell<bool>,
        fail_mutation: RefCell<Option<ApiError>>,
    }

    impl MockApi {
        fn with_rows(rows: Vec<DepartmentSection>) -> Rc<Self> {
            let api = Self::default();
            *api.rows.borrow_mut() = rows;
            api.next_id.set(100);
            Rc::new(api)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn mutation_result(&self) -> Result<(), ApiError> {
            match self.fail_mutation.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ListSource for Rc<MockApi> {
        type Item = DepartmentSection;

        async fn list(&self) -> Result<Vec<DepartmentSection>, ApiError> {
            self.calls.borrow_mut().push("list".into());
            if self.fail_list.get() {
                return Err(ApiError::Network("connection refused".into()));
            }
            Ok(self.rows.borrow().clone())
        }
    }

    #[async_trait(?Send)]
    impl CrudApi for Rc<MockApi> {
        type Input = DepartmentSectionDto;

        async fn create(&self, input: &DepartmentSectionDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("create".into());
            self.mutation_result()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.rows.borrow_mut().push(section(&id.to_string(), &input.name.resolve("en"), 0));
            Ok(())
        }

        async fn update(&self, id: &str, input: &DepartmentSectionDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("update {id}"));
            self.mutation_result()?;
            for row in self.rows.borrow_mut().iter_mut().filter(|r| r.id == id) {
                row.name = input.name.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.mutation_result()?;
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        log: Rc<RefCell<Vec<(bool, String)>>>,
    }

    impl RecordingNotifier {
        fn entries(&self) -> Vec<(bool, String)> {
            self.log.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: String) {
            self.log.borrow_mut().push((true, message));
        }

        fn error(&self, message: String) {
            self.log.borrow_mut().push((false, message));
        }
    }

    struct ScriptedConfirm {
        answer: bool,
        asked: Cell<usize>,
    }

    impl ScriptedConfirm {
        fn new(answer: bool) -> Self {
            Self { answer, asked: Cell::new(0) }
        }
    }

    impl Confirmer for ScriptedConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }

    fn section(id: &str, name: &str, departments: u32) -> DepartmentSection {
        DepartmentSection {
            id: id.into(),
            name: LocalizedText::plain(name),
            slug: contracts::shared::slug::slugify(name),
            description: None,
            sort_order: 0,
            is_visible: true,
            departments_count: departments,
        }
    }

    fn dto(name: &str) -> DepartmentSectionDto {
        DepartmentSectionDto {
            name: LocalizedText::pair(name, ""),
            slug: contracts::shared::slug::slugify(name),
            ..Default::default()
        }
    }

    type Store = Rc<RefCell<ListState<DepartmentSection>>>;

    fn setup(
        rows: Vec<DepartmentSection>,
    ) -> (ListController<Rc<MockApi>, RecordingNotifier, Store>, Rc<MockApi>, RecordingNotifier, Store) {
        let api = MockApi::with_rows(rows);
        let notifier = RecordingNotifier::default();
        let store: Store = Rc::new(RefCell::new(ListState::default()));
        let controller = ListController::new(api.clone(), notifier.clone(), store.clone(), MESSAGES);
        (controller, api, notifier, store)
    }

    fn ids(store: &Store) -> Vec<String> {
        store.borrow().items.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ListState::<DepartmentSection>::default();
        assert!(state.loading);
        assert!(!state.loaded);
        assert!(state.is_busy());
    }

    #[test]
    fn test_load_replaces_collection() {
        let (controller, _api, notifier, store) = setup(vec![section("1", "Sciences", 2), section("2", "Support", 0)]);
        store.borrow_mut().items = vec![section("stale", "Old", 0)];

        assert!(block_on(controller.load()));

        assert_eq!(ids(&store), vec!["1", "2"]);
        assert!(!store.borrow().loading);
        assert!(store.borrow().loaded);
        assert!(notifier.entries().is_empty());
    }

    #[test]
    fn test_load_failure_empties_collection_and_reports_fallback() {
        let (controller, api, notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());
        api.fail_list.set(true);

        assert!(!block_on(controller.load()));

        assert!(store.borrow().items.is_empty());
        assert!(!store.borrow().loading);
        assert_eq!(notifier.entries(), vec![(false, "Failed to load sections".to_string())]);
    }

    #[test]
    fn test_create_with_empty_name_makes_no_call() {
        let (controller, api, notifier, _store) = setup(vec![]);

        let outcome = block_on(controller.create(&DepartmentSectionDto::default()));

        assert_eq!(outcome, MutationOutcome::Invalid);
        assert!(api.calls().is_empty());
        assert_eq!(notifier.entries(), vec![(false, "Name is required".to_string())]);
    }

    #[test]
    fn test_create_notifies_then_reloads() {
        let (controller, api, notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());

        let outcome = block_on(controller.create(&dto("Engineering")));

        assert_eq!(outcome, MutationOutcome::Completed);
        assert_eq!(api.calls(), vec!["list", "create", "list"]);
        assert_eq!(notifier.entries(), vec![(true, "Section created".to_string())]);
        assert_eq!(store.borrow().items, *api.rows.borrow());
        assert_eq!(ids(&store), vec!["1", "100"]);
        assert_eq!(store.borrow().in_flight, 0);
    }

    #[test]
    fn test_failed_update_keeps_collection_and_shows_server_message() {
        let (controller, api, notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());
        let before = store.borrow().items.clone();
        *api.fail_mutation.borrow_mut() = Some(ApiError::from_status(409, r#"{"message":"Slug already taken"}"#));

        let outcome = block_on(controller.update("1", &dto("Applied Sciences")));

        assert_eq!(outcome, MutationOutcome::Failed);
        assert_eq!(store.borrow().items, before);
        assert_eq!(api.calls(), vec!["list", "update 1"]);
        assert_eq!(notifier.entries(), vec![(false, "Slug already taken".to_string())]);
    }

    #[test]
    fn test_failed_delete_without_message_uses_fallback() {
        let (controller, api, notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());
        *api.fail_mutation.borrow_mut() = Some(ApiError::from_status(500, ""));

        let outcome = block_on(controller.delete("1", &ScriptedConfirm::new(true)));

        assert_eq!(outcome, MutationOutcome::Failed);
        assert_eq!(ids(&store), vec!["1"]);
        assert_eq!(notifier.entries(), vec![(false, "Failed to delete section".to_string())]);
    }

    #[test]
    fn test_delete_of_section_with_departments_is_blocked() {
        let (controller, api, notifier, _store) = setup(vec![section("1", "Sciences", 3)]);
        block_on(controller.load());
        let confirm = ScriptedConfirm::new(true);

        assert!(controller.delete_blocker("1").is_some());
        let outcome = block_on(controller.delete("1", &confirm));

        assert_eq!(outcome, MutationOutcome::Blocked);
        assert_eq!(confirm.asked.get(), 0);
        assert_eq!(api.calls(), vec!["list"]);
        assert!(notifier.entries().is_empty());
    }

    #[test]
    fn test_declined_confirmation_is_a_no_op() {
        let (controller, api, notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());
        let confirm = ScriptedConfirm::new(false);

        let outcome = block_on(controller.delete("1", &confirm));

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert_eq!(confirm.asked.get(), 1);
        assert_eq!(api.calls(), vec!["list"]);
        assert!(notifier.entries().is_empty());
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn test_confirmed_delete_reloads_from_server() {
        let (controller, api, notifier, store) =
            setup(vec![section("1", "Sciences", 0), section("2", "Support", 0)]);
        block_on(controller.load());

        let outcome = block_on(controller.delete("1", &ScriptedConfirm::new(true)));

        assert!(outcome.is_completed());
        assert_eq!(api.calls(), vec!["list", "delete 1", "list"]);
        assert_eq!(ids(&store), vec!["2"]);
        assert_eq!(notifier.entries(), vec![(true, "Section deleted".to_string())]);
    }

    #[test]
    fn test_every_successful_mutation_matches_a_fresh_load() {
        let (controller, api, _notifier, store) = setup(vec![section("1", "Sciences", 0)]);
        block_on(controller.load());

        block_on(controller.create(&dto("Engineering")));
        assert_eq!(store.borrow().items, *api.rows.borrow());

        block_on(controller.update("100", &dto("Engineering & Design")));
        assert_eq!(store.borrow().items, *api.rows.borrow());
        assert_eq!(store.borrow().items[1].name.resolve("en"), "Engineering & Design");

        block_on(controller.delete("1", &ScriptedConfirm::new(true)));
        assert_eq!(store.borrow().items, *api.rows.borrow());
        assert_eq!(ids(&store), vec!["100"]);
    }

    #[test]
    fn test_filtered_view_uses_cached_items() {
        let (controller, _api, _notifier, store) =
            setup(vec![section("1", "Materials Lab", 0), section("2", "Chemistry Unit", 0)]);
        block_on(controller.load());

        let visible = store.borrow().filtered(&FilterState::with_search("lab"), "en");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name.resolve("en"), "Materials Lab");
    }
}
