fn main() -> anyhow::Result<()> {
    // Scene graphs are flattened recursively, give deep hierarchies room.
    let child = std::thread::Builder::new()
        .stack_size(1024 * 1024 * 512)
        .spawn(mesh_inspect::internal_main)?;

    child
        .join()
        .map_err(|_| anyhow::anyhow!("Mesh inspection thread panicked"))?
}
