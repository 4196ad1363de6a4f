fn main() -> anyhow::Result<()> {
    pseudojs::run()
}
