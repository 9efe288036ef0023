use assert_cmd::Command;

pub fn checklist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("checklist").unwrap();
    cmd.env_remove("CHECKLIST_ROOT");
    cmd.env_remove("CHECKLIST_LOG");
    cmd
}
