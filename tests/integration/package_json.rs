use crate::helpers::prelude::*;
use serde_json::json;

#[test]
fn it_renames_the_package_and_keeps_other_fields() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.read_json("my-app/package.json"),
        json!({
            "name": "my-app",
            "version": "0.0.0",
            "private": true,
            "scripts": {
                "dev": "vite",
                "build": "vite build"
            },
            "dependencies": {
                "solid-js": "^1.7.0"
            }
        })
    );
}

#[test]
fn dot_target_scaffolds_in_place_without_cd() {
    let dir = create_workspace();
    let dir_name = dir
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    binary()
        .arg(".")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("npm install")
                .and(predicates::str::contains("cd ").not())
                .from_utf8(),
        );

    assert_eq!(dir.read_json("package.json")["name"], json!(dir_name));
    assert!(dir.exists(".gitignore"));
}

#[test]
fn next_steps_follow_the_user_agent() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .arg_user_agent("pnpm/8.1.0 node/18")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("cd my-app")
                .and(predicates::str::contains("pnpm install"))
                .and(predicates::str::contains("pnpm run dev"))
                .from_utf8(),
        );
}

#[test]
fn yarn_gets_its_short_commands() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .arg_user_agent("yarn/1.22.19 npm/? node/v18.16.0 linux x64")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("yarn dev")
                .and(predicates::str::contains("yarn install").not())
                .from_utf8(),
        );
}

#[test]
fn missing_user_agent_defaults_to_npm() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("npm install")
                .and(predicates::str::contains("npm run dev"))
                .from_utf8(),
        );
}
