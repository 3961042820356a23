use log::error;
use yew::prelude::*;
use yew_hooks::prelude::use_update;

use super::controller::{FormController, FormHandle};
use super::validation::Field;

/// One form controller per component instance. The controller lives as long
/// as the component; every change re-renders it.
#[hook]
pub fn use_form(fields: &'static [Field]) -> FormHandle {
    let controller = use_mut_ref(|| FormController::with_fields(fields));
    let update = use_update();
    FormHandle::new(controller, update)
}

impl FormHandle {
    /// Input callback writing into `field`.
    pub fn bind(&self, field: Field) -> Callback<String> {
        let form = self.clone();
        Callback::from(move |value: String| {
            if let Err(err) = form.update_field(field, value) {
                error!("{}", err);
            }
        })
    }
}
