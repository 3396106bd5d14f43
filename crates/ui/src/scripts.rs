use async_trait::async_trait;
use dioxus::document::eval;
use serde::Deserialize;
use services::ClipboardError;
use services::page::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use services::page::tooltip::{Rect, Size};
use services::page::ClipboardBackend;

/// Reports `window.scrollY` on every scroll event.
pub const SCROLL_LISTENER_SCRIPT: &str = r#"
    if (window.__checklistScroll) {
        window.removeEventListener("scroll", window.__checklistScroll);
    }
    window.__checklistScroll = () => dioxus.send(window.scrollY || 0);
    window.addEventListener("scroll", window.__checklistScroll, { passive: true });
    dioxus.send(window.scrollY || 0);
    await new Promise(() => {});
"#;

/// Reports the keys the page shortcuts react to. Ctrl+K is suppressed here
/// because the default has to be prevented synchronously.
pub const KEYDOWN_LISTENER_SCRIPT: &str = r#"
    if (window.__checklistKeydown) {
        document.removeEventListener("keydown", window.__checklistKeydown);
    }
    window.__checklistKeydown = (event) => {
        const focusSearch = event.ctrlKey && event.key === "k";
        if (focusSearch) {
            event.preventDefault();
        }
        if (focusSearch || event.key === "Escape") {
            dioxus.send({ key: event.key, ctrl: event.ctrlKey });
        }
    };
    document.addEventListener("keydown", window.__checklistKeydown);
    await new Promise(() => {});
"#;

const USER_AGENT_SCRIPT: &str = r#"return navigator.userAgent || "";"#;

const CLIPBOARD_AVAILABLE_SCRIPT: &str =
    r#"return !!(navigator.clipboard && navigator.clipboard.writeText && window.isSecureContext);"#;

/// Message of the reveal observer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RevealMessage {
    Observe(String),
    Visible(String),
}

/// Observes every element marked `data-reveal`, including the ones rendered
/// later, and reports each one once when it scrolls into view.
#[must_use]
pub fn reveal_listener_script() -> String {
    let margin = js_string_literal(REVEAL_ROOT_MARGIN);
    format!(
        r#"
        if (window.__checklistReveal) {{
            window.__checklistReveal.intersections.disconnect();
            window.__checklistReveal.mutations.disconnect();
        }}
        const intersections = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                if (entry.isIntersecting) {{
                    intersections.unobserve(entry.target);
                    dioxus.send({{ kind: "visible", id: entry.target.id }});
                }}
            }}
        }}, {{ threshold: {REVEAL_THRESHOLD}, rootMargin: {margin} }});
        const observe = (root) => {{
            const nodes = root.querySelectorAll ? root.querySelectorAll("[data-reveal]") : [];
            for (const el of nodes) {{
                if (!el.id || el.dataset.revealObserved === "true") continue;
                el.dataset.revealObserved = "true";
                dioxus.send({{ kind: "observe", id: el.id }});
                intersections.observe(el);
            }}
        }};
        const mutations = new MutationObserver(() => observe(document));
        mutations.observe(document.body, {{ childList: true, subtree: true }});
        window.__checklistReveal = {{ intersections, mutations }};
        observe(document);
        await new Promise(() => {{}});
        "#
    )
}

pub fn scroll_item_into_view(element_id: &str) {
    let _ = eval(&scroll_into_view_script(element_id));
}

pub fn scroll_to_top() {
    let _ = eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}

pub fn focus_element(element_id: &str) {
    let _ = eval(&focus_script(element_id));
}

pub async fn read_user_agent() -> Option<String> {
    eval(USER_AGENT_SCRIPT).join::<String>().await.ok()
}

/// Appends a script tag and resolves once it loaded. Returns false when the
/// script failed to load.
pub async fn load_script(src: &str) -> bool {
    eval(&load_script_script(src))
        .join::<bool>()
        .await
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct TooltipBoxes {
    anchor: Rect,
    label: Size,
}

/// Measures an anchor and its rendered tooltip after the next frame.
pub async fn measure_tooltip(anchor_id: &str, label_id: &str) -> Option<(Rect, Size)> {
    let boxes = eval(&measure_tooltip_script(anchor_id, label_id))
        .join::<Option<TooltipBoxes>>()
        .await
        .ok()??;
    Some((boxes.anchor, boxes.label))
}

#[derive(Debug, Deserialize)]
struct CopyResult {
    ok: bool,
    #[serde(default)]
    error: String,
}

/// Clipboard access through the webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalClipboard;

#[async_trait(?Send)]
impl ClipboardBackend for EvalClipboard {
    async fn platform_available(&self) -> bool {
        eval(CLIPBOARD_AVAILABLE_SCRIPT)
            .join::<bool>()
            .await
            .unwrap_or(false)
    }

    async fn write_platform(&self, text: &str) -> Result<(), ClipboardError> {
        let result = eval(&write_platform_script(text))
            .join::<CopyResult>()
            .await
            .map_err(|err| ClipboardError::Rejected(err.to_string()))?;
        if result.ok {
            Ok(())
        } else {
            Err(ClipboardError::Rejected(result.error))
        }
    }

    async fn copy_legacy(&self, text: &str) -> Result<(), ClipboardError> {
        let copied = eval(&copy_legacy_script(text))
            .join::<bool>()
            .await
            .unwrap_or(false);
        if copied {
            Ok(())
        } else {
            Err(ClipboardError::LegacyCopyFailed)
        }
    }
}

fn scroll_into_view_script(element_id: &str) -> String {
    let id = js_string_literal(element_id);
    format!(
        r#"
        const el = document.getElementById({id});
        if (el) {{ el.scrollIntoView({{ behavior: "smooth", block: "center" }}); }}
        "#
    )
}

fn focus_script(element_id: &str) -> String {
    let id = js_string_literal(element_id);
    format!(
        r#"
        const el = document.getElementById({id});
        if (el) {{ el.focus(); if (el.select) {{ el.select(); }} }}
        "#
    )
}

fn load_script_script(src: &str) -> String {
    let src = js_string_literal(src);
    format!(
        r#"
        return await new Promise((resolve) => {{
            const script = document.createElement("script");
            script.src = {src};
            script.onload = () => resolve(true);
            script.onerror = () => resolve(false);
            document.head.appendChild(script);
        }});
        "#
    )
}

fn measure_tooltip_script(anchor_id: &str, label_id: &str) -> String {
    let anchor = js_string_literal(anchor_id);
    let label = js_string_literal(label_id);
    format!(
        r#"
        await new Promise((resolve) => requestAnimationFrame(() => resolve()));
        const anchor = document.getElementById({anchor});
        const label = document.getElementById({label});
        if (!anchor || !label) {{ return null; }}
        const a = anchor.getBoundingClientRect();
        return {{
            anchor: {{ left: a.left, top: a.top, width: a.width, height: a.height }},
            label: {{ width: label.offsetWidth, height: label.offsetHeight }},
        }};
        "#
    )
}

fn write_platform_script(text: &str) -> String {
    let text = js_string_literal(text);
    format!(
        r#"
        try {{
            await navigator.clipboard.writeText({text});
            return {{ ok: true }};
        }} catch (err) {{
            return {{ ok: false, error: String(err) }};
        }}
        "#
    )
}

fn copy_legacy_script(text: &str) -> String {
    let text = js_string_literal(text);
    format!(
        r#"
        const area = document.createElement("textarea");
        area.value = {text};
        area.style.position = "fixed";
        area.style.left = "-999999px";
        area.style.top = "-999999px";
        document.body.appendChild(area);
        area.focus();
        area.select();
        let copied = false;
        try {{
            copied = document.execCommand("copy");
        }} catch (_) {{
            copied = false;
        }}
        area.remove();
        return copied;
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
