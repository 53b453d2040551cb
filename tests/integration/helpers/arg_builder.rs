use assert_cmd::Command;

pub fn binary() -> Command {
    let mut cmd = Command::cargo_bin("create-solid").unwrap();
    cmd.env_remove("npm_config_user_agent")
        .env_remove("RUST_LOG");
    cmd
}

pub trait BinaryCommand {
    fn arg_template(&mut self, template: impl AsRef<str>) -> &mut Self;
    fn arg_user_agent(&mut self, user_agent: impl AsRef<str>) -> &mut Self;
}

impl BinaryCommand for Command {
    fn arg_template(&mut self, template: impl AsRef<str>) -> &mut Self {
        self.arg("--template").arg(template.as_ref())
    }

    fn arg_user_agent(&mut self, user_agent: impl AsRef<str>) -> &mut Self {
        self.env("npm_config_user_agent", user_agent.as_ref())
    }
}
