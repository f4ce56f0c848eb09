use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    // Git metadata is only available when building from a checkout
    let in_git_repo = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let mut builder = EmitBuilder::builder();
    builder.build_timestamp();
    if in_git_repo {
        builder.git_sha(true);
    }

    builder.emit().expect("Unable to generate build metadata");
}
