fn main() -> anyhow::Result<()> {
    messenger_app::run()
}
