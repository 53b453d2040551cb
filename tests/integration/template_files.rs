use crate::helpers::prelude::*;
use std::fs;

#[test]
fn it_renames_gitignore() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Scaffolding project in").from_utf8());

    assert_eq!(
        fs::read(dir.join("my-app/.gitignore")).unwrap(),
        fs::read(dir.join("solid-template/_gitignore")).unwrap()
    );
    assert!(!dir.exists("my-app/_gitignore"));
}

#[test]
fn it_copies_nested_files_verbatim() {
    let dir = create_workspace();

    binary()
        .arg("nested/my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.read("nested/my-app/src/index.jsx"),
        dir.read("solid-template/src/index.jsx")
    );
    assert_eq!(
        dir.read("nested/my-app/index.html"),
        dir.read("solid-template/index.html")
    );
}

#[test]
fn it_reuses_an_existing_directory() {
    let dir = tempdir()
        .with_solid_template("solid-template")
        .file("my-app/README.md", "keep me\n")
        .build();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("my-app/README.md"), "keep me\n");
    assert!(dir.exists("my-app/package.json"));
}

#[test]
fn it_fails_without_the_template_directory() {
    let dir = tempdir().with_solid_template("solid-template").build();

    binary()
        .arg("my-app")
        .arg_template("solid-ts")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicates::str::contains("An error occurred")
                .and(predicates::str::contains("solid-ts-template"))
                .and(predicates::str::contains("⛔").count(1))
                .from_utf8(),
        );
}

#[test]
fn it_refuses_a_target_inside_the_template() {
    let dir = create_workspace();

    binary()
        .arg("solid-template/app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("is inside the source directory").from_utf8());

    assert!(!dir.exists("solid-template/app"));
    assert!(!dir.exists("solid-template/.gitignore"));
}

#[test]
fn it_matches_dot_prefixed_exclusions() {
    let dir = tempdir()
        .with_solid_template("solid-template")
        .file("solid-template/README.md", "# template docs\n")
        .file(
            "solid-template/scaffold.toml",
            indoc::indoc! {r#"
                [template]
                exclude = ["./README.md"]
            "#},
        )
        .build();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.exists("my-app/README.md"));
    assert!(dir.exists("my-app/index.html"));
}

#[test]
fn it_honors_template_exclusions() {
    let dir = tempdir()
        .with_solid_template("solid-template")
        .file(
            "solid-template/scaffold.toml",
            indoc::indoc! {r#"
                [template]
                description = "Solid starter"
                exclude = ["index.html"]
            "#},
        )
        .build();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.exists("my-app/index.html"));
    assert!(!dir.exists("my-app/scaffold.toml"));
    assert!(dir.exists("my-app/src/index.jsx"));
}

#[test]
fn it_refuses_templates_for_newer_versions() {
    let dir = tempdir()
        .with_solid_template("solid-template")
        .file(
            "solid-template/scaffold.toml",
            indoc::indoc! {r#"
                [template]
                min_version = ">=999.0.0"
            "#},
        )
        .build();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("version not met").from_utf8());

    assert!(!dir.exists("my-app"));
}
