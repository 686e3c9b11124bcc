//! Built-in product table.

use async_trait::async_trait;

use super::{ProductSource, SourceError};
use crate::catalog::ProductListing;

const SOURCE_LABEL: &str = "TechSpecs";

/// (title, description, price, link slug, category)
const REFERENCE_TABLE: [(&str, &str, &str, &str, &str); 20] = [
    (
        "NVIDIA GeForce RTX 4060",
        "Latest mid-range graphics card with excellent 1080p performance",
        "₹32,999",
        "rtx4060",
        "Graphics Cards",
    ),
    (
        "AMD Ryzen 7 7700X",
        "8-core processor perfect for gaming and content creation",
        "₹28,499",
        "ryzen7700x",
        "Processors",
    ),
    (
        "Samsung 980 PRO 1TB",
        "High-performance NVMe SSD with PCIe 4.0 support",
        "₹8,999",
        "samsung980pro",
        "Storage",
    ),
    (
        "Corsair Vengeance LPX 16GB",
        "DDR4 3200MHz memory kit optimized for performance",
        "₹4,899",
        "corsair16gb",
        "Memory",
    ),
    (
        "ASUS ROG Strix B650E-E",
        "Premium AM5 motherboard with Wi-Fi 6E and PCIe 5.0",
        "₹24,999",
        "asus-b650e",
        "Motherboards",
    ),
    (
        "Logitech G Pro X Superlight",
        "Ultra-lightweight wireless gaming mouse",
        "₹11,999",
        "logitechgpro",
        "Peripherals",
    ),
    (
        "SteelSeries Apex Pro",
        "Mechanical keyboard with adjustable actuation",
        "₹18,999",
        "steelseries-apex",
        "Peripherals",
    ),
    (
        "MSI MAG 274QRF-QD",
        "27-inch 1440p gaming monitor with 165Hz refresh rate",
        "₹26,999",
        "msi-monitor",
        "Monitors",
    ),
    (
        "Cooler Master MasterLiquid ML240L",
        "240mm AIO liquid cooler with RGB lighting",
        "₹7,999",
        "coolermaster-aio",
        "Cooling",
    ),
    (
        "Seasonic Focus GX-850",
        "80+ Gold modular power supply unit",
        "₹12,999",
        "seasonic-psu",
        "Power Supply",
    ),
    (
        "Intel Core i5-13600K",
        "13th gen processor with excellent gaming performance",
        "₹24,999",
        "intel-i5-13600k",
        "Processors",
    ),
    (
        "NVIDIA GeForce RTX 4070",
        "High-performance graphics card for 1440p gaming",
        "₹54,999",
        "rtx4070",
        "Graphics Cards",
    ),
    (
        "G.Skill Trident Z RGB 32GB",
        "DDR4 3600MHz memory kit with RGB lighting",
        "₹12,999",
        "gskill-32gb",
        "Memory",
    ),
    (
        "Western Digital Black SN850X 2TB",
        "High-speed NVMe SSD for gaming and content creation",
        "₹16,999",
        "wd-black-2tb",
        "Storage",
    ),
    (
        "Razer DeathAdder V3",
        "Ergonomic gaming mouse with Focus Pro 30K sensor",
        "₹8,999",
        "razer-deathadder",
        "Peripherals",
    ),
    (
        "LG 27GP850-B",
        "27-inch 1440p IPS monitor with 165Hz and G-Sync",
        "₹29,999",
        "lg-monitor",
        "Monitors",
    ),
    (
        "Noctua NH-D15",
        "Premium dual-tower CPU cooler with excellent cooling",
        "₹8,999",
        "noctua-nhd15",
        "Cooling",
    ),
    (
        "EVGA SuperNOVA 750 G6",
        "80+ Gold fully modular PSU with 10-year warranty",
        "₹10,999",
        "evga-psu",
        "Power Supply",
    ),
    (
        "MSI B550 Gaming Plus",
        "Mid-range AM4 motherboard with PCIe 4.0 support",
        "₹13,999",
        "msi-b550",
        "Motherboards",
    ),
    (
        "HyperX Cloud II",
        "Gaming headset with 7.1 virtual surround sound",
        "₹6,999",
        "hyperx-cloud2",
        "Peripherals",
    ),
];

/// The built-in listings, in display order.
pub fn reference_listings() -> Vec<ProductListing> {
    REFERENCE_TABLE
        .iter()
        .map(|&(title, description, price, slug, category)| ProductListing {
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            source: SOURCE_LABEL.to_string(),
            link: format!("https://example.com/{}", slug),
            category: category.to_string(),
        })
        .collect()
}

/// Source that always yields the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProductSource;

impl StaticProductSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<ProductListing>, SourceError> {
        Ok(reference_listings())
    }
}
