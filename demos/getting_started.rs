use geocell::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== geocell getting started ===\n");

    // Encode a coordinate at a few precisions
    let penza = location(53.2030476, 45.0324948);
    for precision in [3, 6, 9, 12] {
        let hash = GeoHash::from_location(&penza, precision)?;
        let bbox = hash.bounding_box();
        println!(
            "{:>2} chars: {:<12} {:.6}° x {:.6}°",
            precision,
            hash,
            bbox.latitude_size(),
            bbox.longitude_size()
        );
    }

    // Decode and walk around the cell
    let hash: GeoHash = "v12n8trdj".parse()?;
    let center = hash.center();
    println!(
        "\n{} center: ({:.8}, {:.8})",
        hash,
        center.latitude(),
        center.longitude()
    );
    println!("next: {}, prev: {}", hash.next_cell(), hash.prev());

    println!("\nNeighbourhood:");
    for row in hash.adjacent_box().chunks(3) {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", cells.join(" "));
    }

    // A region spanning several cells
    let region = TwoGeoHashBoundingBox::from_bounding_box(
        &BoundingBox::new(location(53.203643, 45.008654), location(53.200764, 45.011658)),
        7,
    )?;
    println!("\nRegion {} covers {}", region, region.bounding_box());

    Ok(())
}
