//! Image resources
//!
//! All images are loaded once at startup into an `Assets` value that lives for
//! the whole process and is passed by reference to the renderer. A missing or
//! undecodable file is not an error: the slot stays empty, the renderer draws a
//! red box instead, and the size falls back to the 50x50 placeholder scaled by
//! the image's scale factor.

use crate::game::{EntitySizes, SCREEN_HEIGHT, SCREEN_WIDTH};
use sdl2::image::LoadSurface;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Side of the square placeholder used for missing images
const PLACEHOLDER_SIZE: u32 = 50;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Player,
    Drone,
    Fish,
    /// The fish image at HUD icon size
    FishIcon,
    Background,
}

impl ImageId {
    pub const ALL: [ImageId; 5] = [
        ImageId::Player,
        ImageId::Drone,
        ImageId::Fish,
        ImageId::FishIcon,
        ImageId::Background,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ImageId::Player => "player.png",
            ImageId::Drone => "drone.png",
            ImageId::Fish | ImageId::FishIcon => "fish.png",
            ImageId::Background => "background.jpg",
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            ImageId::Player => 0.8,
            ImageId::Drone => 0.4,
            ImageId::Fish => 0.5,
            ImageId::FishIcon => 0.4,
            ImageId::Background => 1.0,
        }
    }

    /// Sprites use their top-left pixel as the transparent colour
    fn color_keyed(&self) -> bool {
        !matches!(self, ImageId::Background)
    }
}

/// Scaled size of an image whose natural size is `width` x `height`.
pub fn scaled_size(image: ImageId, (width, height): (u32, u32)) -> (u32, u32) {
    if image == ImageId::Background {
        return (SCREEN_WIDTH, SCREEN_HEIGHT);
    }
    let scale = image.scale();
    (
        ((width as f32 * scale) as u32).max(1),
        ((height as f32 * scale) as u32).max(1),
    )
}

pub struct Assets<'a> {
    textures: HashMap<ImageId, Texture<'a>>,
    sizes: HashMap<ImageId, (u32, u32)>,
}

impl<'a> Assets<'a> {
    /// Loads every image from `<assets_dir>/images`, substituting placeholders.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, assets_dir: &Path) -> Self {
        let mut textures = HashMap::new();
        let mut sizes = HashMap::new();

        for image in ImageId::ALL {
            let path = assets_dir.join("images").join(image.file_name());
            match load_surface(&path, image.color_keyed()).and_then(|surface| {
                let natural = (surface.width(), surface.height());
                texture_creator
                    .create_texture_from_surface(&surface)
                    .map(|texture| (texture, natural))
                    .map_err(|e| e.to_string())
            }) {
                Ok((texture, natural)) => {
                    sizes.insert(image, scaled_size(image, natural));
                    textures.insert(image, texture);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "image unavailable, using placeholder");
                    sizes.insert(image, scaled_size(image, (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)));
                }
            }
        }

        info!(loaded = textures.len(), total = ImageId::ALL.len(), "images loaded");
        Assets { textures, sizes }
    }

    pub fn texture(&self, image: ImageId) -> Option<&Texture<'a>> {
        self.textures.get(&image)
    }

    pub fn size(&self, image: ImageId) -> (u32, u32) {
        self.sizes
            .get(&image)
            .copied()
            .unwrap_or_else(|| scaled_size(image, (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)))
    }

    /// Box sizes for the entities that are drawn from images
    pub fn entity_sizes(&self) -> EntitySizes {
        EntitySizes {
            player: self.size(ImageId::Player),
            drone: self.size(ImageId::Drone),
            fish: self.size(ImageId::Fish),
            fish_icon: self.size(ImageId::FishIcon),
        }
    }
}

fn load_surface(path: &Path, color_keyed: bool) -> Result<Surface<'static>, String> {
    let surface = Surface::from_file(path)?;
    if !color_keyed {
        return Ok(surface);
    }

    let mut surface = surface.convert_format(PixelFormatEnum::RGBA32)?;
    let key = surface
        .with_lock(|pixels| pixels.get(0..4).map(|p| Color::RGBA(p[0], p[1], p[2], p[3])))
        .ok_or_else(|| format!("{} has no pixels", path.display()))?;
    surface.set_color_key(true, key)?;
    Ok(surface)
}
