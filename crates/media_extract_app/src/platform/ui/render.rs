use media_extract_core::{AppViewModel, EntryRowView, InputMode, MediaCardView, MediaKind};

const TITLE: &str = "MEDIA_EXTRACT.exe";
const GLITCHED_TITLE: &str = "M3D!A_3XTR4CT.3x3";
const SUBTITLE: &str = "> Social Media Content Extraction Protocol v2.0_";

/// Render the whole console as text lines.
pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![title_line(view)];
    lines.push(SUBTITLE.to_string());
    lines.push(format!(
        "  {} {}",
        mode_button("SINGLE_LINK", view.mode == InputMode::Single),
        mode_button("MULTI_LINK", view.mode == InputMode::Multiple)
    ));
    lines.push(String::new());

    lines.push(format!("> MODE: {}_EXTRACTION", view.mode.label()));
    let plural = if view.mode == InputMode::Multiple { "S" } else { "" };
    lines.push(format!("> PASTE TARGET URL{plural} BELOW:"));
    lines.extend(view.entries.iter().map(render_entry));
    if view.can_add {
        lines.push("  [+ ADD_ANOTHER_TARGET]".to_string());
    }

    let trigger = if view.extracting {
        "<EXTRACTING...>"
    } else if view.can_extract {
        "[EXECUTE_EXTRACTION]"
    } else {
        "[EXECUTE_EXTRACTION] (disabled)"
    };
    lines.push(format!("  {trigger} [CLEAR_ALL]"));

    if let Some(summary) = view.results_summary() {
        lines.push(String::new());
        lines.push(format!("> {summary}"));
        lines.extend(
            view.results
                .iter()
                .enumerate()
                .map(|(index, card)| render_card(index, card)),
        );
    }
    lines
}

pub(crate) fn title_line(view: &AppViewModel) -> String {
    let title = if view.glitch { GLITCHED_TITLE } else { TITLE };
    format!("==[ {title} ]==")
}

fn mode_button(label: &str, active: bool) -> String {
    if active {
        format!("[*{label}*]")
    } else {
        format!("[{label}]")
    }
}

fn render_entry(row: &EntryRowView) -> String {
    let mut line = format!("  {:02} > {}", row.position + 1, row.value);
    if let Some(platform) = row.platform {
        line.push_str(&format!("  ({platform})"));
    }
    if row.can_remove {
        line.push_str("  [x]");
    }
    line
}

fn render_card(index: usize, card: &MediaCardView) -> String {
    let kind = kind_label(card.kind);
    let action = if card.downloading {
        "DOWNLOADING...".to_string()
    } else {
        format!("[DOWNLOAD_{kind}]")
    };
    format!(
        "  #{} [{}] {} {}  thumb={}  {}",
        index + 1,
        card.platform.label().to_uppercase(),
        kind,
        card.display_url,
        card.thumbnail,
        action
    )
}

fn kind_label(kind: MediaKind) -> String {
    kind.as_str().to_uppercase()
}
