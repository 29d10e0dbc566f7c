use crate::models::{DEFAULT_BRAND, Image, Product};

fn sample(
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    image_url: &str,
    image_alt: &str,
    featured: bool,
) -> Product {
    Product {
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        brand: DEFAULT_BRAND.to_string(),
        in_stock: true,
        images: vec![Image {
            url: image_url.to_string(),
            alt: Some(image_alt.to_string()),
        }],
        featured,
    }
}

/// Starter catalogue inserted by the seed endpoint, in insertion order.
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(
            "Silk Trench Coat",
            "Double-breasted silk trench with mother-of-pearl buttons.",
            1890.0,
            "Outerwear",
            "https://images.unsplash.com/photo-1520975922284-047f014f2c2d",
            "Silk trench coat",
            true,
        ),
        sample(
            "Cashmere Crewneck",
            "Ultra-soft Italian cashmere sweater.",
            690.0,
            "Knitwear",
            "https://images.unsplash.com/photo-1523381210434-271e8be1f52b",
            "Cashmere sweater",
            true,
        ),
        sample(
            "Signature Tailored Trousers",
            "High-rise, tapered wool trousers.",
            520.0,
            "Pants",
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f",
            "Tailored trousers",
            false,
        ),
        sample(
            "Evening Silk Dress",
            "Bias-cut silk charmeuse with open back.",
            2290.0,
            "Dresses",
            "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb",
            "Silk dress",
            true,
        ),
    ]
}
