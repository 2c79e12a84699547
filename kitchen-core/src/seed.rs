//! Seed catalog
//!
//! The static cupcake catalog. These records are reference data only and are
//! never written into the order repository.

use std::sync::LazyLock;

use crate::domain::cupcake::Cupcake;

static CATALOG: LazyLock<Vec<Cupcake>> = LazyLock::new(|| {
    vec![
        Cupcake::new(
            1,
            "Chocolate",
            "Chocolatey and delicious",
            4.95,
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRgsnbhtyxwu83esiCshNY7-YCypRKUHikL58EuaX-DUq-A698-FA",
        ),
        Cupcake::new(
            2,
            "Vanilla",
            "Plain, boring vanilla cupcake",
            4.95,
            "https://www.lifeloveandsugar.com/wp-content/uploads/2017/01/Moist-Vanilla-Cupcakes2.jpg",
        ),
        Cupcake::new(
            3,
            "Red Velvet",
            "Is it chocolate? I don't know! It looks red and tastes delicious",
            5.5,
            "https://therecipecritic.com/wp-content/uploads/2017/01/RedVelvetCupcakes2-667x1000.jpg",
        ),
        Cupcake::new(
            4,
            "Pumpkin Spice",
            "Seasonal classic that tastes like everyone's favorite squash",
            6.99,
            "https://cdn.crownmediadev.com/4a/1e/9808ba9b4487a12d0ccccc84f61c/home-family-pumpkin-spice-latte-cupcakes.jpg",
        ),
        Cupcake::new(
            5,
            "Bubblegum",
            "You asked, we delivered! Bubblegum cupcake that defies every culinary and natural rule",
            20.0,
            "https://www.sbs.com.au/food/sites/sbs.com.au.food/files/bubblepop-electric-cupcakes_lc.jpg",
        ),
        Cupcake::new(
            6,
            "Unicorn",
            "Magical and delicious! Limited edition treat made with real unicorn!",
            999.99,
            "https://media2.s-nbcnews.com/j/newscms/2018_16/1332898/unicorn-cupcakes-today-041918-tease_607876a763a32491c1bf4bb7c8eab53e.today-inline-large.jpg",
        ),
    ]
});

/// All cupcakes in the catalog, ordered by id
pub fn catalog() -> &'static [Cupcake] {
    &CATALOG
}

/// Find a catalog cupcake by id
pub fn find_cupcake(id: u32) -> Option<&'static Cupcake> {
    CATALOG.iter().find(|c| c.id == id)
}
