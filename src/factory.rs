//! Factory building bubbles on top of a dialog backend
//!
//! Every construction function shows its dialog synchronously and only
//! returns once the user is done with it.

use crate::{
    bubble::{ControllerBubble, DropHandler, PopHandler, SelectorBubble},
    constants::SELECTOR_TITLE_SUFFIX,
    dialog::{Control, DialogBackend, DialogConfig, DialoguerBackend, Pane},
    displayable::Displayable,
    error::{Error, Result},
};
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Factory type stored as the process-wide instance
pub type SharedFactory = BubbleFactory<Box<dyn DialogBackend + Send + Sync>>;

static INSTANCE: OnceLock<SharedFactory> = OnceLock::new();

/// Installs the process-wide factory. Only the first install succeeds.
pub fn install(factory: SharedFactory) -> Result<&'static SharedFactory> {
    INSTANCE.set(factory).map_err(|_| Error::AlreadyInstalled)?;
    instance()
}

/// Returns the process-wide factory installed with [`install`].
pub fn instance() -> Result<&'static SharedFactory> {
    INSTANCE.get().ok_or(Error::NotInstalled)
}

/// Builds bubbles whose dialogs are presented by `B`
pub struct BubbleFactory<B = DialoguerBackend> {
    backend: B,
}

impl Default for BubbleFactory<DialoguerBackend> {
    fn default() -> Self {
        Self::new(DialoguerBackend::new())
    }
}

impl<B: DialogBackend> BubbleFactory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Displays a selector over `collection`, labelled by [`Displayable`].
    pub fn displayable_selector<T, I>(&self, collection: I) -> Result<SelectorBubble<T>>
    where
        T: Displayable,
        I: IntoIterator<Item = T>,
    {
        self.displayable_selector_with(collection, None, None)
    }

    /// Same as [`Self::displayable_selector`] with explicit titles.
    ///
    /// `title` defaults to `"<type> selector"` and `combo_box_title` to the
    /// simple type name of `T`.
    pub fn displayable_selector_with<T, I>(
        &self,
        collection: I,
        title: Option<&str>,
        combo_box_title: Option<&str>,
    ) -> Result<SelectorBubble<T>>
    where
        T: Displayable,
        I: IntoIterator<Item = T>,
    {
        self.build_selector(collection, title, combo_box_title, |item| item.display())
    }

    /// Displays a selector over `collection`, labelled by [`Display`].
    pub fn selector<T, I>(&self, collection: I) -> Result<SelectorBubble<T>>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        self.selector_with(collection, None, None)
    }

    /// Same as [`Self::selector`] with explicit titles.
    pub fn selector_with<T, I>(
        &self,
        collection: I,
        title: Option<&str>,
        combo_box_title: Option<&str>,
    ) -> Result<SelectorBubble<T>>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        self.build_selector(collection, title, combo_box_title, |item| item.to_string())
    }

    /// Displays a form with the given controls.
    pub fn controller<I>(&self, title: &str, controls: I) -> Result<ControllerBubble>
    where
        I: IntoIterator<Item = Control>,
    {
        self.controller_builder(title).controls(controls).show()
    }

    /// Starts a form dialog that can also carry a pop handler, an image and a
    /// file drop target.
    pub fn controller_builder(&self, title: impl Into<String>) -> ControllerBuilder<'_, B> {
        ControllerBuilder {
            factory: self,
            title: title.into(),
            on_pop: None,
            image: None,
            on_drop: None,
            controls: Vec::new(),
        }
    }

    fn build_selector<T, I, F>(
        &self,
        collection: I,
        title: Option<&str>,
        combo_box_title: Option<&str>,
        label_of: F,
    ) -> Result<SelectorBubble<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        let items: Vec<T> = collection.into_iter().collect();
        if items.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let type_name = simple_type_name::<T>();
        let mut references = IndexMap::with_capacity(items.len());
        for item in items {
            let label = label_of(&item);
            if references.insert(label.clone(), Some(item)).is_some() {
                warn!("Selector label '{label}' is used more than once, keeping the last");
            }
        }

        let title =
            title.map_or_else(|| format!("{type_name}{SELECTOR_TITLE_SUFFIX}"), String::from);
        let combo_box_title = combo_box_title.unwrap_or(&type_name);
        let config = DialogConfig::new(
            title,
            vec![Control::combo_box(combo_box_title, references.keys().cloned())],
        );

        debug!("Showing selector '{}' with {} choices", config.title, references.len());
        let pane = self.backend.show(&config)?;
        debug!("Selector '{}' resolved as {:?}", config.title, pane.outcome());
        Ok(SelectorBubble::new(pane, references))
    }
}

/// Builder for controller bubbles; see [`BubbleFactory::controller_builder`]
pub struct ControllerBuilder<'f, B> {
    factory: &'f BubbleFactory<B>,
    title: String,
    on_pop: Option<PopHandler>,
    image: Option<PathBuf>,
    on_drop: Option<DropHandler>,
    controls: Vec<Control>,
}

impl<B: DialogBackend> ControllerBuilder<'_, B> {
    /// Called when the bubble is popped, including the automatic pop of a
    /// cancelled dialog.
    pub fn on_pop(mut self, on_pop: impl FnMut(&Pane) + 'static) -> Self {
        self.on_pop = Some(Box::new(on_pop));
        self
    }

    pub fn image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Adds a file drop target calling `on_drop` with the dropped file.
    pub fn on_drop(mut self, on_drop: impl FnMut(&Path) + 'static) -> Self {
        self.on_drop = Some(Box::new(on_drop));
        self
    }

    pub fn control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    pub fn controls(mut self, controls: impl IntoIterator<Item = Control>) -> Self {
        self.controls.extend(controls);
        self
    }

    /// Shows the dialog and wraps the result.
    ///
    /// A cancelled dialog is popped before the bubble is returned.
    pub fn show(self) -> Result<ControllerBubble> {
        use crate::bubble::Bubble;

        if self.title.trim().is_empty() {
            return Err(Error::MissingArgument("title"));
        }

        let mut on_drop = self.on_drop;
        let config = DialogConfig {
            title: self.title,
            controls: self.controls,
            image: self.image,
            accepts_drop: on_drop.is_some(),
        };

        debug!("Showing controller '{}' with {} controls", config.title, config.controls.len());
        let pane = self.factory.backend.show(&config)?;

        if let (Some(path), Some(on_drop)) = (pane.dropped_file(), on_drop.as_mut()) {
            debug!("File '{}' dropped on '{}'", path.display(), config.title);
            on_drop(path);
        }

        let cancelled = pane.did_cancel();
        let mut bubble = ControllerBubble::new(pane, self.on_pop);
        if cancelled {
            info!("Controller '{}' was cancelled, popping it", config.title);
            bubble.pop()?;
        }
        Ok(bubble)
    }
}

/// `T`'s type name without module paths or references.
///
/// Generic arguments of a named type are dropped (`Vec<String>` is `Vec`),
/// tuples and arrays keep their shape (`(u32, Point)`, `[Point; 2]`).
pub fn simple_type_name<T: ?Sized>() -> String {
    let mut name = std::any::type_name::<T>();
    while let Some(rest) = name.strip_prefix('&') {
        name = rest.strip_prefix("mut ").unwrap_or(rest);
    }
    if !name.starts_with('(') && !name.starts_with('[') {
        name = name.split('<').next().unwrap_or(name);
    }

    let mut simple = String::with_capacity(name.len());
    let mut path = String::new();
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            push_last_segment(&mut simple, &path);
            path.clear();
            simple.push(ch);
        }
    }
    push_last_segment(&mut simple, &path);
    simple
}

fn push_last_segment(simple: &mut String, path: &str) {
    simple.push_str(path.rsplit("::").next().unwrap_or(path));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bubble::{Bubble, BubbleType},
        dialog::{ControlValue, ScriptedBackend},
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    struct Fruit {
        id: u32,
        name: &'static str,
    }

    impl Displayable for Fruit {
        fn display(&self) -> String {
            self.name.to_string()
        }
    }

    mod inner {
        pub struct Point;
    }

    fn fruits() -> Vec<Fruit> {
        vec![Fruit { id: 1, name: "apple" }, Fruit { id: 2, name: "pear" }]
    }

    fn text(value: &str) -> ControlValue {
        ControlValue::Text(value.to_string())
    }

    #[test]
    fn simple_type_names() {
        assert_eq!(simple_type_name::<Fruit>(), "Fruit");
        assert_eq!(simple_type_name::<String>(), "String");
        assert_eq!(simple_type_name::<Vec<String>>(), "Vec");
        assert_eq!(simple_type_name::<u32>(), "u32");
        assert_eq!(simple_type_name::<&str>(), "str");
        assert_eq!(simple_type_name::<&mut Fruit>(), "Fruit");
        assert_eq!(simple_type_name::<(u32, inner::Point)>(), "(u32, Point)");
        assert_eq!(simple_type_name::<[inner::Point; 2]>(), "[Point; 2]");
        assert_eq!(simple_type_name::<(Vec<String>, u8)>(), "(Vec<String>, u8)");
    }

    #[test]
    fn selector_over_str_slices_is_titled_by_str() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        factory.selector(["a", "b"]).unwrap();

        let shown = factory.backend().shown();
        assert_eq!(shown[0].title, "str selector");
        assert_eq!(shown[0].controls[0].title(), "str");
    }

    #[test]
    fn selector_defaults_titles_from_type_name() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        factory.displayable_selector(fruits()).unwrap();

        let shown = factory.backend().shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Fruit selector");
        assert_eq!(shown[0].controls, vec![Control::combo_box("Fruit", ["apple", "pear"])]);
    }

    #[test]
    fn selector_uses_explicit_titles() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        factory.selector_with(["a", "b"], Some("Letters"), Some("Letter")).unwrap();

        let shown = factory.backend().shown();
        assert_eq!(shown[0].title, "Letters");
        assert_eq!(shown[0].controls[0].title(), "Letter");
    }

    #[test]
    fn selector_hands_over_chosen_object() {
        let backend = ScriptedBackend::new().confirming("Fruit selector", vec![text("pear")]);
        let factory = BubbleFactory::new(backend);
        let mut bubble = factory.displayable_selector(fruits()).unwrap();

        assert_eq!(bubble.bubble_type(), BubbleType::Selector);
        assert_eq!(bubble.selected_label(), Some("pear"));

        let mut chosen = None;
        bubble.on_blow(|fruit| chosen = Some(fruit)).unwrap();
        assert_eq!(chosen, Some(Fruit { id: 2, name: "pear" }));
    }

    #[test]
    fn labels_keep_presentation_order_after_blow() {
        let backend = ScriptedBackend::new().confirming("Fruit selector", vec![text("apple")]);
        let factory = BubbleFactory::new(backend);
        let mut bubble = factory.displayable_selector(fruits()).unwrap();

        assert_eq!(bubble.labels().collect::<Vec<_>>(), ["apple", "pear"]);
        bubble.on_blow(|_| {}).unwrap();
        assert_eq!(bubble.labels().collect::<Vec<_>>(), ["apple", "pear"]);
        assert_eq!(bubble.selected_label(), Some("apple"));
    }

    #[test]
    fn cancelled_selector_never_calls_back() {
        let backend = ScriptedBackend::new().cancelling("Fruit selector");
        let factory = BubbleFactory::new(backend);
        let mut bubble = factory.displayable_selector(fruits()).unwrap();

        let mut called = false;
        bubble.on_blow(|_| called = true).unwrap();
        assert!(!called);
        assert!(!bubble.is_confirmed());
        assert_eq!(bubble.selected_label(), None);
    }

    #[test]
    fn selector_is_single_fire() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        let mut bubble = factory.selector(["only"]).unwrap();

        let mut calls = 0;
        bubble.on_blow(|_| calls += 1).unwrap();
        assert!(matches!(bubble.on_blow(|_| calls += 1), Err(Error::AlreadyBlown)));
        assert_eq!(calls, 1);
    }

    #[test]
    fn empty_collection_fails_without_showing_a_dialog() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        let result = factory.displayable_selector(Vec::<Fruit>::new());

        assert!(matches!(result, Err(Error::EmptyCollection)));
        assert!(factory.backend().shown().is_empty());
    }

    #[test]
    fn selector_cannot_pop() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        let mut bubble = factory.selector([1, 2, 3]).unwrap();

        assert!(!bubble.supports_pop());
        assert!(matches!(
            bubble.pop(),
            Err(Error::UnsupportedOperation { operation: "pop", .. })
        ));
    }

    #[test]
    fn colliding_labels_keep_the_last_object() {
        let backend = ScriptedBackend::new().confirming("Fruit selector", vec![text("apple")]);
        let factory = BubbleFactory::new(backend);
        let twins = vec![Fruit { id: 1, name: "apple" }, Fruit { id: 7, name: "apple" }];
        let mut bubble = factory.displayable_selector(twins).unwrap();

        assert_eq!(bubble.labels().collect::<Vec<_>>(), ["apple"]);
        let mut chosen = None;
        bubble.on_blow(|fruit| chosen = Some(fruit)).unwrap();
        assert_eq!(chosen, Some(Fruit { id: 7, name: "apple" }));
    }

    #[test]
    fn controller_hands_over_pane() {
        let backend = ScriptedBackend::new()
            .confirming("Settings", vec![text("dark"), ControlValue::Flag(true)]);
        let factory = BubbleFactory::new(backend);
        let mut bubble = factory
            .controller(
                "Settings",
                [
                    Control::combo_box("Theme", ["light", "dark"]),
                    Control::check_box("Autosave", false),
                ],
            )
            .unwrap();

        assert_eq!(bubble.bubble_type(), BubbleType::Controller);
        assert!(!bubble.supports_pop());

        let mut result = None;
        bubble.on_blow(|pane| result = Some(pane)).unwrap();
        let pane = result.unwrap();
        assert_eq!(pane.combo_box_text(0), Some("dark"));
        assert_eq!(pane.check_box_value(0), Some(true));
    }

    #[test]
    fn cancelled_controller_pops_once_before_return() {
        let pops = Rc::new(Cell::new(0));
        let factory = BubbleFactory::new(ScriptedBackend::new().cancelling("Delete"));

        let counter = Rc::clone(&pops);
        let mut bubble = factory
            .controller_builder("Delete")
            .on_pop(move |_| counter.set(counter.get() + 1))
            .show()
            .unwrap();

        assert_eq!(pops.get(), 1);
        assert!(bubble.supports_pop());

        let mut called = false;
        bubble.on_blow(|_| called = true).unwrap();
        assert!(!called);

        bubble.pop().unwrap();
        assert_eq!(pops.get(), 2);
    }

    #[test]
    fn confirmed_controller_is_not_popped() {
        let pops = Rc::new(Cell::new(0));
        let factory = BubbleFactory::new(ScriptedBackend::new());

        let counter = Rc::clone(&pops);
        factory
            .controller_builder("Rename")
            .control(Control::text_field("Name"))
            .on_pop(move |_| counter.set(counter.get() + 1))
            .show()
            .unwrap();

        assert_eq!(pops.get(), 0);
    }

    #[test]
    fn controller_without_pop_handler_pops_as_noop() {
        let factory = BubbleFactory::new(ScriptedBackend::new().cancelling("Quiet"));
        let mut bubble = factory.controller("Quiet", []).unwrap();

        assert!(!bubble.supports_pop());
        assert!(bubble.pop().is_ok());
    }

    #[test]
    fn controller_requires_a_title() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        let result = factory.controller("  ", [Control::text_field("Name")]);

        assert!(matches!(result, Err(Error::MissingArgument("title"))));
        assert!(factory.backend().shown().is_empty());
    }

    #[test]
    fn controller_passes_image_and_drop_target_to_backend() {
        let factory = BubbleFactory::new(ScriptedBackend::new());
        factory
            .controller_builder("Avatar")
            .image("avatar.png")
            .on_drop(|_| {})
            .show()
            .unwrap();

        let shown = factory.backend().shown();
        assert_eq!(shown[0].image, Some(PathBuf::from("avatar.png")));
        assert!(shown[0].accepts_drop);
    }

    #[test]
    fn dropped_file_reaches_handler() {
        use crate::dialog::ScriptedResponse;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello").unwrap();
        let backend = ScriptedBackend::new()
            .with_response("Import", ScriptedResponse::cancel().with_drop(file.path()));
        let factory = BubbleFactory::new(backend);

        let dropped = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&dropped);
        factory
            .controller_builder("Import")
            .on_drop(move |path| sink.borrow_mut().push(path.to_path_buf()))
            .show()
            .unwrap();

        assert_eq!(*dropped.borrow(), vec![file.path().to_path_buf()]);
    }
}
