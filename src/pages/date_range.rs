use chrono::NaiveDate;
use leptos::prelude::*;

use crate::data::availability::DateRange;
use crate::error::DateRangeError;
use crate::utils::date::{format_form_date, parse_form_date, today};

/// The inputs stay disabled while the picker attaches and are enabled once the
/// dialog is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    Attaching,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFieldsState {
    pub phase: PickerPhase,
    pub start: String,
    pub end: String,
}

impl DateFieldsState {
    pub fn open() -> Self {
        Self {
            phase: PickerPhase::Attaching,
            start: String::new(),
            end: String::new(),
        }
    }

    pub fn picker_attached(&mut self) {
        self.phase = PickerPhase::Ready;
    }

    pub fn disabled(&self) -> bool {
        self.phase == PickerPhase::Attaching
    }

    /// Earliest selectable departure: the chosen arrival, or today.
    pub fn end_min(&self, today: NaiveDate) -> NaiveDate {
        match parse_form_date(&self.start) {
            Ok(start) if start > today => start,
            _ => today,
        }
    }

    pub fn to_range(&self, today: NaiveDate) -> Result<DateRange, DateRangeError> {
        DateRange::from_form(&self.start, &self.end, today)
    }
}

#[component]
pub fn DateRangeFields(state: RwSignal<DateFieldsState>) -> impl IntoView {
    let today = today();
    let min_date = format_form_date(today);

    Effect::new(move |_| {
        state.update(|fields| fields.picker_attached());
    });

    view! {
        <div class="grid grid-cols-2 gap-2" id="reservation-dates-modal">
            <input
                type="date"
                name="start"
                id="start"
                required
                placeholder="Arrival"
                class="w-full px-3 py-2 border border-gray-300 rounded-md disabled:bg-gray-100"
                min=min_date
                disabled=move || state.with(|fields| fields.disabled())
                prop:value=move || state.with(|fields| fields.start.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|fields| fields.start = value);
                }
            />
            <input
                type="date"
                name="end"
                id="end"
                required
                placeholder="Departure"
                class="w-full px-3 py-2 border border-gray-300 rounded-md disabled:bg-gray-100"
                min=move || state.with(|fields| format_form_date(fields.end_min(today)))
                disabled=move || state.with(|fields| fields.disabled())
                prop:value=move || state.with(|fields| fields.end.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|fields| fields.end = value);
                }
            />
        </div>
    }
}
