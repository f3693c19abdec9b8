fn main() -> anyhow::Result<()> {
    arcane::runner::run()
}
