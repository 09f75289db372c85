//! End-to-end scenarios for the batch check.
//!
//! Each module exercises one observable policy of the run: exclusion,
//! strict-only classification, and the fail-exit early stop.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CLEAN: &str = "<template>\n  <p>{{ count }}</p>\n</template>\n<script>\nexport default {\n  data() {\n    return { count: 0 };\n  },\n};\n</script>\n";
const BROKEN: &str = "<template>\n  <p>{{ missing }}</p>\n</template>\n<script>\nexport default {\n  data() {\n    return { count: 0 };\n  },\n};\n</script>\n";

fn sfcheck_cmd() -> Command {
    Command::cargo_bin("sfcheck").expect("sfcheck binary is built with the workspace")
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

mod full_run {
    use super::*;

    #[test]
    fn one_broken_component_fails_the_run_and_prints_a_summary() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.vue", CLEAN);
        write(dir.path(), "b.vue", BROKEN);
        write(dir.path(), "c.vue", CLEAN);

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Property 'missing' is not defined"))
            .stdout(predicate::str::contains("errors in 3 file(s)"));
    }
}

mod exclusion {
    use super::*;

    #[test]
    fn excluding_the_folder_with_every_file_yields_a_clean_run() {
        let dir = tempdir().unwrap();
        write(dir.path(), "src/a.vue", BROKEN);
        write(dir.path(), "src/b.vue", BROKEN);
        write(dir.path(), "src/c.vue", BROKEN);

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--exclude-dir")
            .arg(dir.path().join("src"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Found: 0 errors in 0 file(s)"));
    }

    #[test]
    fn exclusion_matches_by_path_prefix() {
        let dir = tempdir().unwrap();
        write(dir.path(), "src/foo/a.vue", BROKEN);
        write(dir.path(), "src/foobar/b.vue", BROKEN);

        // excluding src/foo removes src/foobar too
        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--exclude-dir")
            .arg("src/foo")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found: 0 errors in 0 file(s)"));
    }
}

mod strict_only {
    use super::*;

    #[test]
    fn plain_inline_script_component_is_not_checked() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "plain.vue",
            "<template><p>{{ ghost }}</p></template>\n<script>\nexport default {};\n</script>\n",
        );

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--only-typescript")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found: 0 errors in 0 file(s)"));
    }

    #[test]
    fn component_without_a_script_section_is_still_checked() {
        let dir = tempdir().unwrap();
        write(dir.path(), "markup.vue", "<template><p>static</p></template>\n");

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--only-typescript")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found: 0 errors in 1 file(s)"));
    }
}

mod fail_exit {
    use super::*;

    #[test]
    fn stops_after_the_first_file_with_errors() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.vue", BROKEN);
        write(dir.path(), "b.vue", CLEAN);
        write(dir.path(), "c.vue", CLEAN);

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--fail-exit")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("fail-exit mode"))
            // no end-of-run summary in fail-exit mode
            .stdout(predicate::str::contains("Found:").not());
    }

    #[test]
    fn clean_tree_in_fail_exit_mode_succeeds_quietly() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.vue", CLEAN);

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--fail-exit")
            .assert()
            .success();
    }
}

mod template_only {
    use super::*;

    #[test]
    fn script_findings_are_suppressed() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "script_issue.vue",
            "<template><p>ok</p></template>\n<script>\ndebugger;\n</script>\n",
        );

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--only-template")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found: 0 errors in 1 file(s)"));
    }

    #[test]
    fn template_findings_still_fail() {
        let dir = tempdir().unwrap();
        write(dir.path(), "bad.vue", BROKEN);

        sfcheck_cmd()
            .arg("check")
            .arg(dir.path())
            .arg("--only-template")
            .assert()
            .code(1);
    }
}
