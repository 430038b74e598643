use astar_visualizer::{GridConfig, Visualizer};

// Drives the visualizer the way a window would: pointer clicks in pixels, then one search step
// per frame, printing the cells that have to be redrawn.
fn main() {
    let mut config = GridConfig::new(8, 6);
    config.size_px = 240;
    let mut vis = Visualizer::new(config).unwrap();
    let (w, h) = (config.cell_width() as f32, config.cell_height() as f32);
    let click = |vis: &mut Visualizer, x: i32, y: i32| {
        if vis.paint_at((x as f32 + 0.5) * w, (y as f32 + 0.5) * h).is_none() {
            println!("Click on ({x}, {y}) missed the grid");
        }
    };
    click(&mut vis, 0, 2);
    click(&mut vis, 7, 3);
    for y in 0..5 {
        click(&mut vis, 4, y);
    }
    println!("{}", vis.prompt());
    vis.take_redraws();

    if !vis.begin_search() {
        println!("Could not start the search: {}", vis.prompt());
        return;
    }
    let mut frame = 0;
    let outcome = loop {
        frame += 1;
        let outcome = vis.tick();
        let redraws = vis.take_redraws();
        println!("frame {frame}: {} cells to redraw", redraws.len());
        if let Some(outcome) = outcome {
            break outcome;
        }
    };
    print!("{}", vis.grid());
    println!("{}", vis.prompt());
    if let Some(path) = outcome.path() {
        println!("Path length: {}", path.len());
    }
}
