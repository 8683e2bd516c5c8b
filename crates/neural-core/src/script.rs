//! Output produced by each command once its status line has been typed out.

use super::commands::Command;
use super::commands::BANNER_RULE_BOTTOM;
use super::commands::BANNER_RULE_TOP;
use super::commands::HACK_STEPS;
use super::commands::HELP_REFERENCE;
use super::commands::MATRIX_ROWS;
use super::commands::SKILL_CATEGORIES;
use super::commands::STATUS_REPORT;
use super::config::TimingConfig;
use super::portfolio::PortfolioData;
use super::portfolio::ProjectData;
use super::state::LineDraft;
use super::state::LineKind;

const PROJECT_RULE: &str = "   ─────────────────────────────────────────────────────────────";

/// Lines appended right away plus batches appended later, each batch at a
/// delay measured from the moment the script runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub immediate: Vec<LineDraft>,
    pub staged: Vec<(u64, Vec<LineDraft>)>,
}

impl Script {
    fn stage(&mut self, delay_ms: u64, lines: Vec<LineDraft>) {
        self.staged.push((delay_ms, lines));
    }

    pub fn staged_line_count(&self) -> usize {
        self.staged.iter().map(|(_, lines)| lines.len()).sum()
    }
}

/// Builds the post-reveal output of `command`. `/clear`, `/restart` and
/// `/portfolio` have no listing and return an empty script.
pub fn script_for(command: Command, data: &PortfolioData, timing: &TimingConfig) -> Script {
    match command {
        Command::Projects => projects(data, timing),
        Command::Skills => skills(data, timing),
        Command::About => about(data),
        Command::Help => help(),
        Command::Matrix => matrix(timing),
        Command::Hack => hack(timing),
        Command::Status => status(),
        Command::Portfolio | Command::Clear | Command::Restart => Script::default(),
    }
}

/// The centred three-line box used as a section header.
pub fn banner(title: &str) -> Vec<LineDraft> {
    let inner = BANNER_RULE_TOP.chars().count().saturating_sub(2);
    let title_len = title.chars().count();
    let left = inner.saturating_sub(title_len) / 2;
    let right = inner.saturating_sub(title_len + left);
    vec![
        LineDraft::output(BANNER_RULE_TOP),
        LineDraft::output(format!(
            "║{}{}{}║",
            " ".repeat(left),
            title,
            " ".repeat(right)
        )),
        LineDraft::output(BANNER_RULE_BOTTOM),
    ]
}

fn headed(title: &str) -> Vec<LineDraft> {
    let mut lines = vec![LineDraft::blank()];
    lines.extend(banner(title));
    lines.push(LineDraft::blank());
    lines
}

fn projects(data: &PortfolioData, timing: &TimingConfig) -> Script {
    let mut script = Script {
        immediate: headed("PROJECT FILES"),
        staged: Vec::new(),
    };
    for (index, project) in data.projects.iter().enumerate() {
        script.stage(
            index as u64 * timing.project_stagger_ms,
            project_block(project),
        );
    }
    script
}

fn project_block(project: &ProjectData) -> Vec<LineDraft> {
    let mut lines = vec![
        LineDraft::output(format!(
            "📂 [{}] {}",
            project.id.to_uppercase(),
            project.title
        )),
        LineDraft::output(format!("   📝 DESCRIPTION: {}", project.description)),
        LineDraft::output(format!(
            "   🔧 TECHNOLOGIES: {}",
            project.technologies.join(", ")
        )),
        LineDraft::output(format!(
            "   📊 CATEGORY: {}",
            project.category.to_uppercase()
        )),
    ];
    if project.featured {
        lines.push(LineDraft::output("   ⭐ STATUS: FEATURED PROJECT"));
    }
    if let Some(url) = project.demo_link() {
        lines.push(LineDraft::link(
            format!("   🌐 DEMO: {url}"),
            LineKind::Output,
            url,
        ));
    }
    if let Some(url) = project.source_link() {
        lines.push(LineDraft::link(
            format!("   📋 SOURCE: {url}"),
            LineKind::Output,
            url,
        ));
    }
    lines.push(LineDraft::output(PROJECT_RULE));
    lines.push(LineDraft::blank());
    lines
}

fn skills(data: &PortfolioData, timing: &TimingConfig) -> Script {
    let mut script = Script {
        immediate: headed("SKILL MATRIX"),
        staged: Vec::new(),
    };
    for (cat_index, category) in SKILL_CATEGORIES.iter().enumerate() {
        let skills: Vec<_> = data.skills_in(category).collect();
        if skills.is_empty() {
            continue;
        }
        let base = cat_index as u64 * timing.skill_category_stagger_ms;
        script.stage(
            base,
            vec![LineDraft::output(format!(
                "🔹 [{}]",
                category.to_uppercase()
            ))],
        );
        for (skill_index, skill) in skills.iter().enumerate() {
            script.stage(
                base + skill_index as u64 * timing.skill_item_stagger_ms,
                vec![LineDraft::output(format!(
                    "   {:<15} [{}] {}%",
                    skill.name,
                    skill.bar(),
                    skill.level
                ))],
            );
        }
        script.stage(
            base + skills.len() as u64 * timing.skill_item_stagger_ms + timing.skill_spacer_ms,
            vec![LineDraft::blank()],
        );
    }
    script
}

fn about(data: &PortfolioData) -> Script {
    let about = &data.about;
    let mut lines = headed("SYSTEM INFORMATION");
    lines.extend([
        LineDraft::output("👤 PERSONAL_DATA:"),
        LineDraft::output(format!("   NAME: {}", about.name)),
        LineDraft::output(format!("   ROLE: {}", about.title)),
        LineDraft::output("   STATUS: ONLINE"),
        LineDraft::output("   LOCATION: THE_MATRIX"),
        LineDraft::blank(),
        LineDraft::output("📡 CONTACT_PROTOCOLS:"),
    ]);
    for contact in data.contact_links() {
        lines.push(LineDraft::link(
            format!("   {}: {}", contact.label, contact.shown),
            LineKind::Output,
            contact.target,
        ));
    }
    lines.extend([
        LineDraft::blank(),
        LineDraft::output("📋 BIO_DATA:"),
        LineDraft::output(format!("   {}", about.bio)),
    ]);
    Script {
        immediate: lines,
        staged: Vec::new(),
    }
}

fn help() -> Script {
    let mut lines = headed("AVAILABLE COMMANDS");
    lines.extend(HELP_REFERENCE.iter().map(|line| LineDraft::output(*line)));
    Script {
        immediate: lines,
        staged: Vec::new(),
    }
}

fn matrix(timing: &TimingConfig) -> Script {
    let mut script = Script {
        immediate: vec![LineDraft::blank()],
        staged: Vec::new(),
    };
    for (index, row) in MATRIX_ROWS.iter().enumerate() {
        script.stage(
            index as u64 * timing.matrix_row_ms,
            vec![LineDraft::output(format!("🔢 {row}"))],
        );
    }
    script.stage(
        timing.matrix_finale_ms,
        vec![
            LineDraft::blank(),
            LineDraft::output("✅ MATRIX SIMULATION COMPLETE"),
        ],
    );
    script
}

fn hack(timing: &TimingConfig) -> Script {
    let mut script = Script {
        immediate: vec![LineDraft::blank()],
        staged: Vec::new(),
    };
    let total = HACK_STEPS.len();
    for (index, step) in HACK_STEPS.iter().enumerate() {
        let icon = if index + 1 == total { "✅" } else { "🔓" };
        script.stage(
            index as u64 * timing.hack_step_ms,
            vec![LineDraft::output(format!(
                "{icon} [{}/{total}] {step}",
                index + 1
            ))],
        );
    }
    script
}

fn status() -> Script {
    let mut lines = vec![LineDraft::blank()];
    lines.extend(STATUS_REPORT.iter().map(|line| LineDraft::output(*line)));
    Script {
        immediate: lines,
        staged: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(lines: &[LineDraft]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn banner_matches_the_rule_width() {
        let lines = banner("PROJECT FILES");
        let widths: Vec<usize> = lines.iter().map(|l| l.text.chars().count()).collect();
        assert_eq!(widths, vec![64, 64, 64]);
        assert_eq!(
            lines[1].text,
            "║                        PROJECT FILES                         ║"
        );
    }

    #[test]
    fn status_is_immediate_only() {
        let script = script_for(
            Command::Status,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        assert!(script.staged.is_empty());
        assert_eq!(script.immediate.len(), 1 + STATUS_REPORT.len());
        assert_eq!(script.immediate[1].text, "🖥️  CPU USAGE: 98%");
    }

    #[test]
    fn projects_stagger_one_block_per_project() {
        let script = script_for(
            Command::Projects,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let delays: Vec<u64> = script.staged.iter().map(|(delay, _)| *delay).collect();
        assert_eq!(delays, vec![0, 400, 800]);

        let first = &script.staged[0].1;
        assert_eq!(first[0].text, "📂 [PROJECT-1] Amazon P&L Simplifier Tool");
        assert_eq!(first[3].text, "   📊 CATEGORY: WEB");
        assert_eq!(first[4].text, "   ⭐ STATUS: FEATURED PROJECT");
        assert_eq!(
            first[5].link_target.as_deref(),
            Some("https://github.com/TalhaShaikhcodes/amazon-pnl-tool")
        );
    }

    #[test]
    fn project_without_source_has_only_demo_link() {
        let script = script_for(
            Command::Projects,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let links: Vec<&str> = script.staged[2]
            .1
            .iter()
            .filter_map(|line| line.link_target.as_deref())
            .collect();
        assert_eq!(links.len(), 1);
        assert!(links[0].starts_with("https://chromewebstore.google.com/"));
    }

    #[test]
    fn skills_keep_category_slots_even_when_empty() {
        let script = script_for(
            Command::Skills,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let headers: Vec<(u64, &str)> = script
            .staged
            .iter()
            .filter(|(_, lines)| lines[0].text.starts_with("🔹"))
            .map(|(delay, lines)| (*delay, lines[0].text.as_str()))
            .collect();
        assert_eq!(
            headers,
            vec![
                (0, "🔹 [LANGUAGES]"),
                (1_600, "🔹 [BACKEND]"),
                (2_400, "🔹 [FRONTEND]"),
                (3_200, "🔹 [TOOLS]"),
            ]
        );
    }

    #[test]
    fn skill_rows_are_padded_with_bars() {
        let script = script_for(
            Command::Skills,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let (delay, row) = &script.staged[1];
        assert_eq!(*delay, 0);
        assert_eq!(row[0].text, "   Java            [█████████░] 95%");
        let (delay, row) = &script.staged[2];
        assert_eq!(*delay, 100);
        assert_eq!(row[0].text, "   JavaScript      [█████████░] 90%");

        // languages has four skills: spacer at 4 * 100 + 200
        let (delay, spacer) = &script.staged[5];
        assert_eq!(*delay, 600);
        assert_eq!(texts(spacer), vec![""]);
    }

    #[test]
    fn spacer_and_finale_offsets_do_not_follow_row_cadence() {
        let timing = TimingConfig {
            skill_item_stagger_ms: 10,
            matrix_row_ms: 50,
            ..TimingConfig::default()
        };
        let data = PortfolioData::builtin();

        let skills = script_for(Command::Skills, &data, &timing);
        let (delay, spacer) = &skills.staged[5];
        assert_eq!(*delay, 4 * 10 + 200);
        assert_eq!(texts(spacer), vec![""]);

        let matrix = script_for(Command::Matrix, &data, &timing);
        let delays: Vec<u64> = matrix.staged.iter().map(|(delay, _)| *delay).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200, 1_200]);
    }

    #[test]
    fn matrix_finishes_after_the_last_row() {
        let script = script_for(
            Command::Matrix,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let delays: Vec<u64> = script.staged.iter().map(|(delay, _)| *delay).collect();
        assert_eq!(delays, vec![0, 200, 400, 600, 800, 1_200]);
        assert_eq!(
            texts(&script.staged[5].1),
            vec!["", "✅ MATRIX SIMULATION COMPLETE"]
        );
    }

    #[test]
    fn hack_marks_only_the_last_step_granted() {
        let script = script_for(
            Command::Hack,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        assert_eq!(script.staged_line_count(), HACK_STEPS.len());
        assert_eq!(
            script.staged[0].1[0].text,
            "🔓 [1/6] Scanning network topology..."
        );
        assert_eq!(script.staged[5].0, 3_500);
        assert_eq!(script.staged[5].1[0].text, "✅ [6/6] ACCESS GRANTED");
    }

    #[test]
    fn about_links_email_with_mailto() {
        let script = script_for(
            Command::About,
            &PortfolioData::builtin(),
            &TimingConfig::default(),
        );
        let links: Vec<&str> = script
            .immediate
            .iter()
            .filter_map(|line| line.link_target.as_deref())
            .collect();
        assert_eq!(
            links,
            vec![
                "mailto:stalha423@gmail.com",
                "https://github.com/TalhaShaikhcodes",
                "https://www.linkedin.com/in/talha-shaikh-62a7791b4/",
            ]
        );
    }
}
