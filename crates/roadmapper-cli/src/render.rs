//! Terminal and JSON rendering of roadmaps

use anyhow::Result;
use roadmapper_catalog::RoadmapCatalog;
use roadmapper_types::Roadmap;

use crate::cli::OutputFormat;

/// Render a single roadmap
pub fn render_roadmap(roadmap: &Roadmap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(roadmap)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(roadmap)?),
    }
}

/// Render the catalog listing
pub fn render_catalog(catalog: &RoadmapCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.summaries()),
        OutputFormat::Json => {
            let roadmaps: Vec<&Roadmap> = catalog.iter().collect();
            Ok(serde_json::to_string_pretty(&roadmaps)?)
        }
    }
}

fn render_text(roadmap: &Roadmap) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n\n", roadmap.title, roadmap.description));
    out.push_str(&format!("Difficulty: {}\n", roadmap.difficulty));
    out.push_str(&format!("Estimated time: {}\n", roadmap.estimated_time));
    if !roadmap.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", roadmap.tags.join(", ")));
    }

    // Steps are numbered from 1 in roadmap order
    for (i, step) in roadmap.steps.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", i + 1, step.title));
        out.push_str(&format!("   Duration: {}\n", step.duration));
        if let Some(description) = &step.description {
            out.push_str(&format!("   {}\n", description));
        }
        if !step.resources.is_empty() {
            out.push_str(&format!("   Resources: {}\n", step.resources.join(", ")));
        }
        if step.has_prerequisites() {
            out.push_str(&format!(
                "   Prerequisites: {}\n",
                step.prerequisites.join(", ")
            ));
        }
    }

    out
}
