//! Runtime loading of third-party browser scripts.
//!
//! Scripts are injected one after another and the bundle's `ready`
//! expression is polled until it is truthy. Each script is loaded at most
//! once per page, so concurrent callers share the same load. There is no
//! timeout and no retry: a failed script stays failed until reload.

use dioxus::prelude::*;
use serde_json::{Value, json};
use types::{Result, config::ScriptBundle, err};

const LOAD_SCRIPTS: &str = r#"
window.__dpScripts = window.__dpScripts || {};
const load = (s) => window.__dpScripts[s.src] ??= new Promise((resolve, reject) => {
    const el = document.createElement("script");
    el.src = s.src;
    if (s.module) el.type = "module";
    el.onload = () => resolve();
    el.onerror = () => reject(new Error("failed to load " + s.src));
    document.head.appendChild(el);
});
try {
    for (const s of scripts) await load(s);
    while (!ready()) await new Promise((r) => setTimeout(r, interval));
    return null;
} catch (e) {
    return String((e && e.message) || e);
}
"#;

const RENDER_CHART: &str = r#"
const el = document.getElementById(id);
if (!el) return null;
window.__dpCharts = window.__dpCharts || {};
if (window.__dpCharts[id]) window.__dpCharts[id].destroy();
const chart = new ApexCharts(el, options);
window.__dpCharts[id] = chart;
await chart.render();
return null;
"#;

const DESTROY_CHART: &str = r#"
if (window.__dpCharts && window.__dpCharts[id]) {
    window.__dpCharts[id].destroy();
    delete window.__dpCharts[id];
}
"#;

/// Prefix `body` with `const id = "<id>";`.
pub(crate) fn scoped_script(id: &str, body: &str) -> Result<String> {
    Ok(format!("const id = {};\n{body}", serde_json::to_string(id)?))
}

fn bundle_script(bundle: &ScriptBundle) -> Result<String> {
    let scripts: Vec<Value> = bundle
        .scripts
        .iter()
        .map(|s| json!({ "src": s.src.as_str(), "module": s.module }))
        .collect();
    let scripts = serde_json::to_string(&scripts)?;

    Ok(format!(
        "const scripts = {scripts};\nconst interval = {};\nconst ready = () => {};\n{LOAD_SCRIPTS}",
        bundle.poll_interval_ms, bundle.ready,
    ))
}

/// Load every script of `bundle` in order, then wait for its global.
pub async fn load_bundle(bundle: &ScriptBundle) -> Result<()> {
    let code = bundle_script(bundle)?;
    let failure = document::eval(&code)
        .join::<Option<String>>()
        .await
        .map_err(|e| err!("script loader did not finish: {e:?}"))?;

    match failure {
        None => Ok(()),
        Some(message) => Err(err!("{message}")),
    }
}

/// Draw (or redraw) an ApexCharts chart into the element with `id`.
pub(crate) async fn render_chart(id: &str, options: &Value) -> Result<()> {
    let code = scoped_script(
        id,
        &format!("const options = {};\n{RENDER_CHART}", serde_json::to_string(options)?),
    )?;
    document::eval(&code)
        .join::<Value>()
        .await
        .map_err(|e| err!("failed to render chart {id}: {e:?}"))?;
    Ok(())
}

/// Fire-and-forget script scoped to `id`. Used from drop hooks, where
/// nothing can await the result.
pub(crate) fn run_scoped(id: &str, body: &str) {
    match scoped_script(id, body) {
        Ok(code) => {
            let _ = document::eval(&code);
        }
        Err(e) => tracing::error!(%id, error = %e, "failed to build script"),
    }
}

/// Tear down the chart drawn into `id` and forget it.
pub(crate) fn destroy_chart(id: &str) {
    tracing::debug!(chart = %id, "destroying chart");
    run_scoped(id, DESTROY_CHART);
}

/// Start loading `bundle` once for this component.
///
/// Resolves to `Some(Ok(()))` once the bundle is usable. Failures are
/// logged here; callers just keep their placeholder.
pub fn use_script_bundle(bundle: &'static ScriptBundle) -> Resource<Result<()>> {
    use_resource(move || async move {
        tracing::debug!(scripts = bundle.scripts.len(), ready = %bundle.ready, "loading scripts");
        let result = load_bundle(bundle).await;
        match &result {
            Ok(()) => tracing::info!(ready = %bundle.ready, "scripts ready"),
            Err(e) => tracing::error!(error = %e, "failed to load scripts"),
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::config::CONFIG;

    #[test]
    fn bundle_script_embeds_sources_in_order() {
        let code = bundle_script(&CONFIG.charts).unwrap();
        assert!(code.starts_with("const scripts = [{"));
        assert!(code.contains("apexcharts.min.js"));
        assert!(code.contains("const ready = () => window.ApexCharts;"));
        assert!(code.contains("const interval = 50;"));
    }

    #[test]
    fn chart_teardown_names_its_chart() {
        let code = scoped_script("chart-7", DESTROY_CHART).unwrap();
        assert!(code.starts_with("const id = \"chart-7\";\n"));
        assert!(code.contains("window.__dpCharts[id].destroy()"));
        assert!(code.contains("delete window.__dpCharts[id]"));
    }

    #[test]
    fn scoped_ids_are_escaped() {
        let code = scoped_script(r#"a"b"#, "").unwrap();
        assert_eq!(code, "const id = \"a\\\"b\";\n");
    }

    #[test]
    fn module_scripts_are_flagged() {
        let code = bundle_script(&CONFIG.scene.viewer).unwrap();
        assert!(code.contains(r#""module":true"#));
    }
}
