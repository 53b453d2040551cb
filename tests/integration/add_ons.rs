use crate::helpers::prelude::*;
use serde_json::json;

#[test]
fn it_overlays_selected_add_ons() {
    let dir = tempdir()
        .with_solid_template("solid-template")
        .file(
            "tailwind-addon/package.json",
            indoc::indoc! {r#"
                {
                  "devDependencies": {
                    "tailwindcss": "^3.3.0",
                    "postcss": "^8.4.0"
                  }
                }
            "#},
        )
        .file("tailwind-addon/tailwind.config.js", "export default {};\n")
        .build();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .arg("--tailwind")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("my-app/tailwind.config.js"));
    let manifest = dir.read_json("my-app/package.json");
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(
        manifest["devDependencies"],
        json!({"tailwindcss": "^3.3.0", "postcss": "^8.4.0"})
    );
    assert_eq!(manifest["dependencies"], json!({"solid-js": "^1.7.0"}));
}

#[test]
fn it_fails_when_an_add_on_is_missing() {
    let dir = create_workspace();

    binary()
        .arg("my-app")
        .arg_template("solid")
        .arg("--telefunc")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("telefunc-addon").from_utf8());

    assert!(!dir.exists("my-app"));
}
