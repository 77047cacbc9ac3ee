fn main() -> anyhow::Result<()> {
    fleet_observability::init();

    tracing::info!("rendering clone comparison");
    for line in fleet_demo::report::render()? {
        println!("{line}");
    }

    Ok(())
}
