//! Integration test: realistic Qualtrics header through the file rewriter.
//!
//! Writes a header script the way Qualtrics exports one, rewrites it, and
//! asserts the exact output document, the line-count law, and the fixed
//! point on a second pass.

use qhu_core::image_url::ImageRoot;
use qhu_core::rewrite::{rewrite_file, HeaderRewriter};
use std::fs;
use tempfile::tempdir;

const INPUT: &str = r#"<div id="header_images_placeholder"></div>
<script>
// Image links for the decision-making tasks.
URL_AA_Figure1="https://example.org/stale/AA_Figure1.png";
URL_AA_Figure4="https://example.org/stale/AA_Figure4.gif";
URL_TGb_mainImg_round2="oldvalue";
URL_TG_payoff_table="oldvalue";
URL_TGnh_mainImg="oldvalue";
URL_instructions_banner="oldvalue";
</script>
"#;

const EXPECTED: &str = r#"<div id="header_images_placeholder"></div>
<script>
// Image links for the decision-making tasks.
URL_AA_Figure1="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Ambiguity%20Aversion/AA_Figure1.png";
URL_AA_Figure4="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Ambiguity%20Aversion/AA_Figure4.gif";
URL_TGb_mainImg_round2="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Trust%20Game%20(as%20Player%20B)/TGb_mainImg_round2.png";
URL_TG_payoff_table="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Trust%20Game%20(with%20history)/TG_payoff_table.png";
URL_TGnh_mainImg="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Trust%20Game%20(with%20no%20history)/TGnh_mainImg.png";
URL_instructions_banner="https:"+"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/instructions_banner.png";
</script>
"#;

#[test]
fn header_file_rewrites_to_the_expected_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("QualtricsHeader.js");
    let output = dir.path().join("QualtricsHeaderUpdated.js");
    fs::write(&input, INPUT).unwrap();

    let rewriter = HeaderRewriter::new(ImageRoot::default());
    let out = rewrite_file(&rewriter, &input, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, EXPECTED);

    // Line-count law: one output line per input line.
    assert_eq!(
        written.split_inclusive('\n').count(),
        INPUT.split_inclusive('\n').count()
    );

    assert_eq!(out.report.total_lines, 10);
    assert_eq!(out.report.rewritten(), 6);
    assert_eq!(out.report.passed_through, 4);
    assert_eq!(out.report.without_folder, 1);
    assert_eq!(out.report.malformed, 0);
    assert_eq!(out.report.images[2].name, "TGb_mainImg_round2");
    assert_eq!(out.report.images[2].task_code, Some("_TGb_"));
}

#[test]
fn second_pass_over_updated_header_changes_nothing() {
    let dir = tempdir().unwrap();
    let updated = dir.path().join("QualtricsHeaderUpdated.js");
    let again = dir.path().join("again.js");
    fs::write(&updated, EXPECTED).unwrap();

    let rewriter = HeaderRewriter::new(ImageRoot::default());
    let out = rewrite_file(&rewriter, &updated, &again).unwrap();

    assert_eq!(fs::read_to_string(&again).unwrap(), EXPECTED);
    assert_eq!(out.report.rewritten(), 6);
}

#[test]
fn unterminated_and_crlf_lines_survive_passthrough() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("header.js");
    let output = dir.path().join("out.js");
    fs::write(&input, "plain one\r\nURL_SH_choice=\"old\";\r\nno final newline").unwrap();

    let rewriter = HeaderRewriter::new(ImageRoot::default());
    let out = rewrite_file(&rewriter, &input, &output).unwrap();
    assert_eq!(out.report.total_lines, 3);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.split_inclusive('\n').collect();
    assert_eq!(lines[0], "plain one\r\n");
    // Matched CRLF line is re-emitted with a bare LF.
    assert_eq!(
        lines[1],
        "URL_SH_choice=\"https:\"+\"//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/Stag%20Hunt/SH_choice.png\";\n"
    );
    assert_eq!(lines[2], "no final newline");
}

#[test]
fn strict_mode_rejects_malformed_header_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("header.js");
    let output = dir.path().join("out.js");
    fs::write(&input, "fine\nbroken=\" URL_tail\nURL_SH_choice=\"old\";\n").unwrap();

    let rewriter = HeaderRewriter::new(ImageRoot::default()).strict(true);
    let err = rewrite_file(&rewriter, &input, &output).unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
    assert!(!output.exists());
}

#[test]
fn custom_images_root_flows_through() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("header.js");
    let output = dir.path().join("out.js");
    fs::write(&input, "URL_PD_matrix=\"old\";\n").unwrap();

    let root = ImageRoot {
        scheme: "https:".to_string(),
        host_path: "//raw.githubusercontent.com/my-lab/Tasks/dev/Images/".to_string(),
    };
    let rewriter = HeaderRewriter::new(root);
    rewrite_file(&rewriter, &input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "URL_PD_matrix=\"https:\"+\"//raw.githubusercontent.com/my-lab/Tasks/dev/Images/Prisoner's%20Dilemma/PD_matrix.png\";\n"
    );
}
