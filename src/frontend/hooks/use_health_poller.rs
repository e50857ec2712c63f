use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{UseIntervalFnOptions, use_interval_fn_with_options};
use verdict::config::ClientConfig;
use verdict::state::ProbeGate;

use crate::api;

/// Poll `/health` on mount and then every `config.health_interval`.
///
/// `on_result` receives `true` when the request resolved (any status) and
/// `false` on network failure or timeout. A tick is skipped while the
/// previous check is still in flight, so results always arrive in order.
/// The interval is cleared when the owning component unmounts.
pub fn use_health_poller(config: StoredValue<ClientConfig>, on_result: Callback<bool>) {
    let interval_ms = config.with_value(|c| c.health_interval.as_millis() as u64);
    let gate = StoredValue::new(ProbeGate::default());

    let _ = use_interval_fn_with_options(
        move || {
            let mut admitted = false;
            gate.update_value(|g| admitted = g.try_begin());
            if !admitted {
                return;
            }

            spawn_local(async move {
                let client_config = config.get_value();
                let online = api::check_health(&client_config).await.is_ok();
                gate.update_value(ProbeGate::finish);
                on_result.run(online);
            });
        },
        interval_ms,
        UseIntervalFnOptions::default().immediate_callback(true),
    );
}
