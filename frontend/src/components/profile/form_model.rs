use shared::forms::draft::{DraftRecord, FormState};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Reducer wrapper so a form's draft can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel<R: DraftRecord> {
    pub form: FormState<R>,
}

impl<R: DraftRecord> Default for FormModel<R> {
    fn default() -> Self {
        Self {
            form: FormState::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormAction<R: DraftRecord> {
    Sync(Option<R>),
    Edit(R::Field, String),
    Submit,
    Finish,
    Reset,
}

impl<R: DraftRecord + 'static> Reducible for FormModel<R> {
    type Action = FormAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            FormAction::Sync(source) => next.form.sync(source.as_ref()),
            FormAction::Edit(field, value) => {
                next.form.edit(field, value);
                true
            }
            FormAction::Submit => {
                next.form.mark_submitting();
                true
            }
            FormAction::Finish => {
                next.form.finish();
                true
            }
            FormAction::Reset => {
                next.form.reset();
                true
            }
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Current value of the input, select or textarea that fired `event`.
pub fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// `oninput` handler that writes one field of the draft.
pub fn on_input<R: DraftRecord + 'static>(
    model: &UseReducerHandle<FormModel<R>>,
    field: R::Field,
) -> Callback<InputEvent> {
    let dispatcher = model.dispatcher();
    Callback::from(move |e: InputEvent| {
        dispatcher.dispatch(FormAction::Edit(field, event_value(&e)));
    })
}

/// `onchange` handler for selects.
pub fn on_change<R: DraftRecord + 'static>(
    model: &UseReducerHandle<FormModel<R>>,
    field: R::Field,
) -> Callback<Event> {
    let dispatcher = model.dispatcher();
    Callback::from(move |e: Event| {
        dispatcher.dispatch(FormAction::Edit(field, event_value(&e)));
    })
}

/// Callback taking an already-extracted value, for composite inputs.
pub fn on_value<R: DraftRecord + 'static>(
    model: &UseReducerHandle<FormModel<R>>,
    field: R::Field,
) -> Callback<String> {
    let dispatcher = model.dispatcher();
    Callback::from(move |value: String| dispatcher.dispatch(FormAction::Edit(field, value)))
}

/// Keeps the draft in step with the record owned by the page and closes the
/// submitting phase once the page's save settles.
#[hook]
pub fn use_record_form<R: DraftRecord + 'static>(
    record: Option<R>,
    loading: bool,
) -> UseReducerHandle<FormModel<R>> {
    let model = use_reducer(FormModel::<R>::default);

    {
        let dispatcher = model.dispatcher();
        use_effect_with(record, move |record| {
            dispatcher.dispatch(FormAction::Sync(record.clone()));
            || ()
        });
    }

    {
        let dispatcher = model.dispatcher();
        use_effect_with(loading, move |loading| {
            if !*loading {
                dispatcher.dispatch(FormAction::Finish);
            }
            || ()
        });
    }

    model
}
