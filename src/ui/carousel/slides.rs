/// One frame of the pipeline carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Glyph drawn in the slide's icon tile.
    pub icon: &'static str,
    pub features: [&'static str; 4],
}

impl Slide {
    /// Accessible name of the indicator that selects this slide.
    pub fn control_label(&self) -> String {
        format!("Go to {} step", self.title)
    }
}

pub const SLIDE_COUNT: usize = 4;

pub const SLIDES: [Slide; SLIDE_COUNT] = [
    Slide {
        id: "ingest",
        title: "Ingest",
        subtitle: "Bring In Any Document",
        description: "Upload PDFs, scans, spreadsheets and email attachments in bulk or one at a time. \
                      Parscade queues every file and processes batches in parallel.",
        icon: "⇣",
        features: ["Bulk upload", "Parallel processing", "Queue management", "Progress tracking"],
    },
    Slide {
        id: "extract",
        title: "Extract",
        subtitle: "Structure From Chaos",
        description: "Layout-aware parsing turns tables, forms and free text into typed fields, \
                      in any of the supported languages.",
        icon: "⌗",
        features: ["Table detection", "Form fields", "Multi-language", "Custom schemas"],
    },
    Slide {
        id: "validate",
        title: "Validate",
        subtitle: "Trust Every Field",
        description: "Rules and confidence scores catch missing totals, mismatched dates and \
                      malformed identifiers before data leaves the pipeline.",
        icon: "✓",
        features: ["Confidence scores", "Business rules", "Live validation", "Review queue"],
    },
    Slide {
        id: "deliver",
        title: "Deliver",
        subtitle: "Straight Into Your Stack",
        description: "Send clean records to webhooks, warehouses and APIs as soon as each \
                      document finishes.",
        icon: "➤",
        features: ["Webhook integration", "REST API", "Event triggers", "Exports"],
    },
];
