//! Built-in catalog. Stands in for a real menu backend; identifiers are
//! hashed from slugs so they stay stable across runs.

use anyhow::Result;
use url::Url;

use infra::ids::Id;

use super::models::{Category, Nutrition, Pizza};

const IMAGE_BASE: &str = "https://images.sapore.example";

pub(super) fn builtin() -> Result<(Vec<Category>, Vec<Pizza>)> {
    Ok((categories(), pizzas()?))
}

fn categories() -> Vec<Category> {
    vec![
        category(
            "salgadas",
            "Pizzas Salgadas",
            Some("Tradicionais receitas italianas com ingredientes premium"),
            1,
        ),
        category(
            "doces",
            "Pizzas Doces",
            Some("Sobremesas irresistíveis em formato de pizza"),
            2,
        ),
        category(
            "veganas",
            "Pizzas Veganas",
            Some("Opções 100% vegetais sem abrir mão do sabor"),
            3,
        ),
        category(
            "especiais",
            "Especialidades da Casa",
            Some("Criações exclusivas do nosso chef italiano"),
            4,
        ),
    ]
}

fn pizzas() -> Result<Vec<Pizza>> {
    let mut out = Vec::new();

    out.push(Pizza {
        id: Id::hashed("margherita-classica"),
        name: "Margherita Clássica".to_string(),
        description: "A rainha das pizzas! Molho de tomate San Marzano, mozzarella di bufala, \
                      manjericão fresco e azeite extra virgem."
            .to_string(),
        ingredients: strings(&[
            "Molho de tomate San Marzano",
            "Mozzarella di Bufala",
            "Manjericão fresco",
            "Azeite extra virgem",
        ]),
        price: 52.90,
        image_url: image("margherita-classica")?,
        category_id: Id::hashed("salgadas"),
        available: true,
        featured: true,
        preparation_minutes: 15,
        nutrition: nutrition(280, 12, 35, 10, 2),
        tags: strings(&["vegetariana", "tradicional"]),
        slug: "margherita-classica".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("quattro-formaggi"),
        name: "Quattro Formaggi".to_string(),
        description: "Harmonia perfeita de quatro queijos nobres: gorgonzola, parmesão, \
                      mozzarella e fontina italiana."
            .to_string(),
        ingredients: strings(&["Gorgonzola DOP", "Parmigiano Reggiano", "Mozzarella", "Fontina"]),
        price: 68.90,
        image_url: image("quattro-formaggi")?,
        category_id: Id::hashed("salgadas"),
        available: true,
        featured: true,
        preparation_minutes: 18,
        nutrition: nutrition(350, 18, 32, 18, 1),
        tags: strings(&["vegetariana", "queijos"]),
        slug: "quattro-formaggi".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("pepperoni-premium"),
        name: "Pepperoni Premium".to_string(),
        description: "Pepperoni artesanal italiano, mozzarella especial e orégano siciliano \
                      sobre molho de tomate encorpado."
            .to_string(),
        ingredients: strings(&[
            "Pepperoni artesanal",
            "Mozzarella especial",
            "Molho de tomate",
            "Orégano siciliano",
        ]),
        price: 58.90,
        image_url: image("pepperoni-premium")?,
        category_id: Id::hashed("salgadas"),
        available: true,
        featured: false,
        preparation_minutes: 20,
        nutrition: nutrition(320, 15, 33, 14, 2),
        tags: strings(&["picante", "carne"]),
        slug: "pepperoni-premium".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("prosciutto-rucula"),
        name: "Prosciutto e Rúcula".to_string(),
        description: "Prosciutto di Parma DOP, rúcula selvagem, tomate cereja, mozzarella e \
                      redução de aceto balsâmico."
            .to_string(),
        ingredients: strings(&[
            "Prosciutto di Parma DOP",
            "Rúcula selvagem",
            "Tomate cereja",
            "Mozzarella",
            "Aceto balsâmico",
        ]),
        price: 74.90,
        image_url: image("prosciutto-rucula")?,
        category_id: Id::hashed("salgadas"),
        available: true,
        featured: true,
        preparation_minutes: 22,
        nutrition: nutrition(290, 16, 30, 12, 3),
        tags: strings(&["premium", "carne"]),
        slug: "prosciutto-rucula".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("brasileirinha"),
        name: "Brasileirinha".to_string(),
        description: "Nossa homenagem ao Brasil: catupiry original, frango desfiado temperado, \
                      milho doce e azeitona verde."
            .to_string(),
        ingredients: strings(&[
            "Catupiry original",
            "Frango desfiado",
            "Milho doce",
            "Azeitona verde",
        ]),
        price: 56.90,
        image_url: image("brasileirinha")?,
        category_id: Id::hashed("salgadas"),
        available: true,
        featured: false,
        preparation_minutes: 25,
        nutrition: nutrition(310, 20, 28, 13, 2),
        tags: strings(&["brasileira", "frango"]),
        slug: "brasileirinha".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("nutella-morango"),
        name: "Nutella com Morango".to_string(),
        description: "Massa doce artesanal coberta com Nutella original, morangos frescos e \
                      açúcar de confeiteiro."
            .to_string(),
        ingredients: strings(&[
            "Nutella original",
            "Morangos frescos",
            "Açúcar de confeiteiro",
            "Massa doce",
        ]),
        price: 48.90,
        image_url: image("nutella-morango")?,
        category_id: Id::hashed("doces"),
        available: true,
        featured: true,
        preparation_minutes: 15,
        nutrition: nutrition(380, 8, 52, 16, 3),
        tags: strings(&["doce", "frutas"]),
        slug: "nutella-morango".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("romeu-julieta-premium"),
        name: "Romeu e Julieta Premium".to_string(),
        description: "Queijo minas artesanal derretido com goiabada cremosa de primeira \
                      qualidade."
            .to_string(),
        ingredients: strings(&[
            "Queijo Minas artesanal",
            "Goiabada cremosa premium",
            "Canela em pó",
        ]),
        price: 44.90,
        image_url: image("romeu-julieta-premium")?,
        category_id: Id::hashed("doces"),
        available: true,
        featured: false,
        preparation_minutes: 18,
        nutrition: nutrition(340, 12, 45, 12, 1),
        tags: strings(&["doce", "brasileira", "tradicional"]),
        slug: "romeu-julieta-premium".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("vegana-mediterranean"),
        name: "Vegana Mediterranean".to_string(),
        description: "Molho de tomate especial, queijo vegano artesanal, abobrinha, berinjela, \
                      pimentão e azeitonas Kalamata."
            .to_string(),
        ingredients: strings(&[
            "Queijo vegano artesanal",
            "Abobrinha grelhada",
            "Berinjela",
            "Pimentão",
            "Azeitonas Kalamata",
        ]),
        price: 62.90,
        image_url: image("vegana-mediterranean")?,
        category_id: Id::hashed("veganas"),
        available: true,
        featured: true,
        preparation_minutes: 20,
        nutrition: nutrition(240, 8, 35, 8, 6),
        tags: strings(&["vegana", "mediterrânea", "low-carb"]),
        slug: "vegana-mediterranean".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("vegana-tropical"),
        name: "Vegana Tropical".to_string(),
        description: "Queijo vegano, abacaxi grelhado, tomate cereja, cebola roxa e coentro \
                      fresco."
            .to_string(),
        ingredients: strings(&[
            "Queijo vegano",
            "Abacaxi grelhado",
            "Tomate cereja",
            "Cebola roxa",
            "Coentro fresco",
        ]),
        price: 58.90,
        image_url: image("vegana-tropical")?,
        category_id: Id::hashed("veganas"),
        available: true,
        featured: false,
        preparation_minutes: 18,
        nutrition: nutrition(220, 6, 38, 6, 4),
        tags: strings(&["vegana", "tropical", "frutas"]),
        slug: "vegana-tropical".to_string(),
    });

    // Seasonal: only on the menu while black truffles are in season.
    out.push(Pizza {
        id: Id::hashed("tartufo-nero"),
        name: "Tartufo Nero".to_string(),
        description: "Nossa criação mais exclusiva: trufa negra italiana, queijo taleggio, \
                      cogumelos porcini e azeite trufado."
            .to_string(),
        ingredients: strings(&[
            "Trufa negra italiana",
            "Queijo Taleggio",
            "Cogumelos Porcini",
            "Azeite trufado",
        ]),
        price: 128.90,
        image_url: image("tartufo-nero")?,
        category_id: Id::hashed("especiais"),
        available: false,
        featured: true,
        preparation_minutes: 25,
        nutrition: nutrition(420, 20, 30, 25, 2),
        tags: strings(&["premium", "exclusiva", "trufa"]),
        slug: "tartufo-nero".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("salmao-defumado"),
        name: "Salmão Defumado".to_string(),
        description: "Base de cream cheese, salmão defumado norueguês, alcaparras, cebola roxa \
                      e endro fresco."
            .to_string(),
        ingredients: strings(&[
            "Cream cheese",
            "Salmão defumado norueguês",
            "Alcaparras",
            "Cebola roxa",
            "Endro fresco",
        ]),
        price: 89.90,
        image_url: image("salmao-defumado")?,
        category_id: Id::hashed("especiais"),
        available: true,
        featured: true,
        preparation_minutes: 20,
        nutrition: nutrition(360, 22, 28, 18, 1),
        tags: strings(&["premium", "peixe", "sofisticada"]),
        slug: "salmao-defumado".to_string(),
    });

    out.push(Pizza {
        id: Id::hashed("burrata-speciale"),
        name: "Burrata Speciale".to_string(),
        description: "Molho de tomate San Marzano, burrata fresca, tomate cereja confitado, \
                      manjericão roxo e redução de vinho tinto."
            .to_string(),
        ingredients: strings(&[
            "Burrata fresca",
            "Tomate cereja confitado",
            "Manjericão roxo",
            "Redução de vinho tinto",
        ]),
        price: 84.90,
        image_url: image("burrata-speciale")?,
        category_id: Id::hashed("especiais"),
        available: true,
        featured: true,
        preparation_minutes: 22,
        nutrition: nutrition(320, 16, 32, 14, 3),
        tags: strings(&["premium", "queijo", "gourmet"]),
        slug: "burrata-speciale".to_string(),
    });

    Ok(out)
}

fn category(slug: &str, name: &str, description: Option<&str>, order: u32) -> Category {
    Category {
        id: Id::hashed(slug),
        name: name.to_string(),
        description: description.map(|d| d.to_string()),
        slug: slug.to_string(),
        order,
        active: true,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

fn image(slug: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}/{}.jpg", IMAGE_BASE, slug))?)
}

fn nutrition(calories_per_slice: u32, protein: u32, carbohydrates: u32, fat: u32, fiber: u32) -> Option<Nutrition> {
    Some(Nutrition {
        calories_per_slice,
        protein,
        carbohydrates,
        fat,
        fiber,
    })
}
