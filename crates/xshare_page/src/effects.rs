use ui_logging::{ui_info, ui_warn};
use xshare_core::Effect;

use crate::runtime::PageRuntime;
use crate::storage::save_to_local_storage;
use crate::timers::TimerTask;

impl PageRuntime {
    pub(crate) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleToastExpiry { id, after } => {
                    self.timers.schedule(after, TimerTask::ToastExpiry(id));
                }
                Effect::ScheduleFilter { generation, after } => {
                    self.timers
                        .schedule(after, TimerTask::FilterDebounce(generation));
                }
                Effect::Persist { key, value } => {
                    if !save_to_local_storage(self.store.as_mut(), &key, &value) {
                        ui_warn!("Setting {key:?} was not persisted");
                    }
                }
                Effect::SubmitForm { values } => {
                    ui_info!("Form submitted with {} fields", values.len());
                    self.submissions.push(values);
                }
            }
        }
    }
}
