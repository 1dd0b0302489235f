use super::raster::Framebuffer;
use super::{RenderBuffers, SnowCore};

pub(super) fn extract_flakes(world: &mut SnowCore) -> &[i32] {
    let buf = &mut world.render.flake_transfer;
    buf.clear();
    for flake in world.flakes.iter() {
        buf.extend_from_slice(&[flake.x, flake.y, flake.radius as i32]);
    }
    buf
}

pub(super) fn render_frame(world: &mut SnowCore) -> &Framebuffer {
    let RenderBuffers { frame, snow_color, background_color, .. } = &mut world.render;
    frame.clear(*background_color);
    for flake in world.flakes.iter() {
        frame.fill_circle(flake.x, flake.y, flake.radius, *snow_color);
    }
    frame.draw_skyline(world.field.as_slice(), *snow_color);
    frame
}
