use crate::explanation::types::{NoteKind, PlantCard, RecipeExplanation};

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &RecipeExplanation) -> String {
        let mut md = String::with_capacity(2048);
        let request = &explanation.request;

        // Title
        md.push_str(&format!(
            "# {} Garden: {} / {}\n\n",
            request.goal_display, request.space_display, request.sun_display
        ));
        md.push_str(&format!(
            "**Selected:** {}/{} plants ({} feasible candidates)\n\n",
            request.selected, request.max_plants, request.feasible_candidates
        ));

        // Warnings first, they explain a short plan
        if !explanation.warnings.is_empty() {
            md.push_str("## Warnings\n\n");
            for warning in &explanation.warnings {
                md.push_str(&format!("{} **{}**  \n", warning.icon, warning.message));
                md.push_str(&format!("{}  \n", warning.detail));
                md.push_str(&format!("*Advice:* {}\n\n", warning.advice));
            }
        }

        if !explanation.cards.is_empty() {
            md.push_str("## Plants\n\n");
            for card in &explanation.cards {
                Self::format_card(&mut md, card);
            }
        }

        md
    }

    fn format_card(md: &mut String, card: &PlantCard) {
        match &card.taxonomic_name {
            Some(tax) => md.push_str(&format!("### {}. {} (*{}*)\n\n", card.position, card.display_name, tax)),
            None => md.push_str(&format!("### {}. {}\n\n", card.position, card.display_name)),
        }

        md.push_str(&format!("**Category:** {}  \n", card.category));
        md.push_str(&format!(
            "**Ranking score:** {} | **Companion score:** {}\n\n",
            card.ranking_score, card.companion_score
        ));

        if !card.reasons.is_empty() {
            for reason in &card.reasons {
                md.push_str(&format!("- {}\n", reason));
            }
            md.push('\n');
        }

        if !card.synergy_notes.is_empty() {
            md.push_str("**Synergy:**\n\n");
            for note in &card.synergy_notes {
                let icon = match note.kind {
                    NoteKind::Companion => "🤝",
                    NoteKind::Antagonist => "⚔️",
                };
                md.push_str(&format!("- {} {}\n", icon, note.message));
            }
            md.push('\n');
        }
    }
}
