use plc_deploy::domain::entities::{ArtifactBundle, ArtifactFingerprint};
use plc_deploy::domain::value_objects::Target;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check(
    bundle: &ArtifactBundle,
    targets: &[Target],
    fingerprints: &[ArtifactFingerprint],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "plc-deploy check");
    header.add("Project", bundle.project_file().display().to_string());
    header.add(
        "Binaries",
        format!("{} files (with checksums)", bundle.app_crc_files().len()),
    );
    match bundle.visu() {
        Some(visu) => header.add(
            "Visu",
            format!("{} ({} items)", visu.dir().display(), visu.items().len()),
        ),
        None => header.add("Visu", "none"),
    }
    let mut out = header.render(supports_color, supports_unicode);

    if !fingerprints.is_empty() {
        out.push('\n');
        for print in fingerprints {
            out.push_str(&format!(
                "  {}  {:>10}  {}\n",
                &print.sha256[..print.sha256.len().min(16)],
                print.size,
                print.path.display()
            ));
        }
    }

    let mut summary = ResultSummary::success("Inputs valid");
    summary.add_stat("artifacts", bundle.files().len());
    summary.add_stat("targets", targets.len());
    if targets.is_empty() {
        summary.add_warning("no targets; deploy would do nothing");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
