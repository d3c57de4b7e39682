//! 门店展示内容服务
//!
//! 菜单、顾客评价和门店信息目前是编译进二进制的静态数据，
//! 由本服务统一持有并以 `Arc` 共享给各 handler。
//! 内容改版走发版流程，不提供运行时编辑接口。

use shared::models::{
    Coordinates, DayHours, Menu, MenuCategory, MenuItem, Review, StoreInfo,
};

/// 静态内容服务
pub struct ContentService {
    menu: Menu,
    reviews: Vec<Review>,
    store_info: StoreInfo,
}

impl ContentService {
    pub fn new() -> Self {
        Self {
            menu: build_menu(),
            reviews: build_reviews(),
            store_info: build_store_info(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn store_info(&self) -> &StoreInfo {
        &self.store_info
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

fn item(name: &str, description: &str, price: u32) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price,
    }
}

fn build_menu() -> Menu {
    Menu {
        categories: vec![
            MenuCategory {
                id: "entrees".to_string(),
                label: "Entrées".to_string(),
                items: vec![
                    item(
                        "Velouté de butternut",
                        "Crème fraîche, graines de courge torréfiées, huile de noisette",
                        12,
                    ),
                    item(
                        "Burrata crémeuse",
                        "Tomates anciennes, pesto de basilic frais, huile d'olive extra vierge",
                        14,
                    ),
                    item(
                        "Tartare de saumon",
                        "Avocat, agrumes, herbes fraîches, toast de pain au levain",
                        16,
                    ),
                    item(
                        "Œuf parfait 63°",
                        "Crème de champignons, lardons croustillants, mouillettes au beurre",
                        13,
                    ),
                ],
            },
            MenuCategory {
                id: "plats".to_string(),
                label: "Plats".to_string(),
                items: vec![
                    item(
                        "Filet de bœuf Rossini",
                        "Escalope de foie gras poêlée, sauce Périgueux, pommes grenaille",
                        38,
                    ),
                    item(
                        "Suprême de volaille fermière",
                        "Jus au thym, écrasé de pommes de terre à l'huile de truffe",
                        28,
                    ),
                    item(
                        "Pavé de cabillaud rôti",
                        "Beurre blanc au citron, légumes de saison, riz sauvage",
                        32,
                    ),
                    item(
                        "Risotto aux cèpes",
                        "Parmesan 24 mois, huile de truffe noire, roquette",
                        26,
                    ),
                ],
            },
            MenuCategory {
                id: "desserts".to_string(),
                label: "Desserts".to_string(),
                items: vec![
                    item(
                        "Fondant au chocolat Valrhona",
                        "Cœur coulant, crème anglaise vanille bourbon",
                        12,
                    ),
                    item(
                        "Tarte Tatin",
                        "Pommes caramélisées, glace vanille de Madagascar, caramel beurre salé",
                        11,
                    ),
                    item(
                        "Crème brûlée à la lavande",
                        "Caramel craquant, tuile aux amandes",
                        10,
                    ),
                    item(
                        "Assiette de fromages affinés",
                        "Sélection du moment, confiture de figues, noix",
                        14,
                    ),
                ],
            },
            MenuCategory {
                id: "boissons".to_string(),
                label: "Boissons".to_string(),
                items: vec![
                    item(
                        "Verre de vin rouge (Bordeaux)",
                        "Château sélection du sommelier",
                        8,
                    ),
                    item("Verre de vin blanc (Loire)", "Sancerre, notes d'agrumes", 9),
                    item(
                        "Cocktail signature Le Gros Arbre",
                        "Gin, sirop de sureau, citron vert, menthe fraîche",
                        12,
                    ),
                    item(
                        "Café gourmand",
                        "Espresso accompagné de trois mignardises maison",
                        9,
                    ),
                ],
            },
        ],
    }
}

fn build_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".to_string(),
            author: "Noémie Asfaux".to_string(),
            badge: "Local Guide · 24 avis · 48 photos".to_string(),
            text: "Un cadre magnifique, une cuisine faite maison. Je recommande.".to_string(),
            rating: 5,
        },
        Review {
            id: "2".to_string(),
            author: "Antoine S".to_string(),
            badge: "Local Guide · 696 avis · 2 771 photos".to_string(),
            text: "Un lieu hors du temps ! Un bout de campagne avec une maison isolée et un \
                   cèdre du Liban bicentenaire se mirant dans les eaux du Bassin des Filtres, \
                   un ouvrage historique du Canal du Midi"
                .to_string(),
            rating: 5,
        },
        Review {
            id: "3".to_string(),
            author: "Marie L.".to_string(),
            badge: "25 avis".to_string(),
            text: "Excellente découverte ! L'ambiance est chaleureuse et les plats sont \
                   délicieux. Le service est impeccable."
                .to_string(),
            rating: 5,
        },
        Review {
            id: "4".to_string(),
            author: "Pierre D.".to_string(),
            badge: "Local Guide · 150 avis".to_string(),
            text: "Un endroit magique au bord de l'eau. La terrasse sous le cèdre est un vrai \
                   bonheur. Cuisine raffinée et généreuse."
                .to_string(),
            rating: 4,
        },
    ]
}

fn build_store_info() -> StoreInfo {
    let hours = [
        ("monday", "12:00 - 23:30"),
        ("tuesday", "Fermé"),
        ("wednesday", "Fermé"),
        ("thursday", "12:00 - 23:45"),
        ("friday", "12:00 - 23:45"),
        ("saturday", "12:00 - 23:45"),
        ("sunday", "12:00 - 23:45"),
    ]
    .into_iter()
    .map(|(day, hours)| DayHours {
        day: day.to_string(),
        hours: hours.to_string(),
    })
    .collect();

    StoreInfo {
        name: "Le Gros Arbre".to_string(),
        address: "110 Rue des Amidonniers, 31000 Toulouse".to_string(),
        area: "Bassin des Filtres – Centre-ville".to_string(),
        phone: "07 65 87 29 34".to_string(),
        facebook: "facebook.com".to_string(),
        rating: 4.4,
        reviews_count: 558,
        price_range: "30-40€".to_string(),
        hours,
        coordinates: Coordinates {
            lat: 43.6114,
            lng: 1.4289,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_four_categories_in_course_order() {
        let service = ContentService::new();
        let ids: Vec<&str> = service
            .menu()
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["entrees", "plats", "desserts", "boissons"]);
        assert!(service.menu().categories.iter().all(|c| !c.items.is_empty()));
    }

    #[test]
    fn store_info_lists_all_seven_days() {
        let service = ContentService::new();
        assert_eq!(service.store_info().hours.len(), 7);
        assert_eq!(service.store_info().name, "Le Gros Arbre");
        assert_eq!(service.reviews().len(), 4);
    }
}
