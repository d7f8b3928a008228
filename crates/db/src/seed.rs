//! Static sample dataset for local development and demos.
//!
//! Every insert uses `ON CONFLICT (slug) DO NOTHING`, so seeding an
//! already-seeded database changes nothing.

use gbc_core::types::DbId;
use sqlx::PgPool;

/// One seed translation row: language, title, summary text, category, tags.
struct SeedTranslation {
    language: &'static str,
    title: &'static str,
    body: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
}

/// Insert the sample blog posts, events, and resources. Idempotent.
pub async fn seed_sample_content(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_blog_posts(pool).await?;
    seed_events(pool).await?;
    seed_resources(pool).await?;
    tracing::info!("Sample content seeded");
    Ok(())
}

async fn seed_blog_posts(pool: &PgPool) -> Result<(), sqlx::Error> {
    let posts: [(&str, i32, &[SeedTranslation]); 2] = [
        (
            "welcome-to-the-council",
            3,
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Bienvenue au Conseil du bâtiment durable",
                    body: "Le conseil réunit les acteurs de la construction durable \
                           autour d'un objectif commun : un parc bâti sobre en carbone.",
                    category: "Actualités",
                    tags: &["conseil", "lancement"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Welcome to the Green Building Council",
                    body: "The council brings together the sustainable construction \
                           community around one goal: a low-carbon building stock.",
                    category: "News",
                    tags: &["council", "launch"],
                },
                SeedTranslation {
                    language: "ar",
                    title: "مرحباً بكم في مجلس البناء الأخضر",
                    body: "يجمع المجلس مجتمع البناء المستدام حول هدف واحد: مبانٍ منخفضة الكربون.",
                    category: "أخبار",
                    tags: &["المجلس"],
                },
            ],
        ),
        (
            "five-principles-of-passive-design",
            7,
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Cinq principes de conception passive",
                    body: "Orientation, isolation, étanchéité à l'air, ventilation et \
                           apports solaires : les fondamentaux d'un bâtiment passif.",
                    category: "Technique",
                    tags: &["conception-passive", "énergie"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Five Principles of Passive Design",
                    body: "Orientation, insulation, airtightness, ventilation, and solar \
                           gains: the fundamentals of a passive building.",
                    category: "Technical",
                    tags: &["passive-design", "energy"],
                },
            ],
        ),
    ];

    for (slug, read_time, translations) in posts {
        let id: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO blog_posts (slug, status, read_time_mins) \
             VALUES ($1, 'published', $2) \
             ON CONFLICT (slug) DO NOTHING \
             RETURNING id",
        )
        .bind(slug)
        .bind(read_time)
        .fetch_optional(pool)
        .await?;

        // Already seeded: the entity insert was a no-op.
        let Some(id) = id else { continue };

        for tr in translations {
            sqlx::query(
                "INSERT INTO blog_post_translations \
                    (post_id, language, title, excerpt, content, author, category, tags) \
                 VALUES ($1, $2, $3, $4, $4, 'Secrétariat', $5, $6)",
            )
            .bind(id)
            .bind(tr.language)
            .bind(tr.title)
            .bind(tr.body)
            .bind(tr.category)
            .bind(collect_tags(tr.tags))
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}

async fn seed_events(pool: &PgPool) -> Result<(), sqlx::Error> {
    let events: [(&str, &str, &[SeedTranslation]); 2] = [
        (
            "annual-summit-2026",
            "2026-10-15T09:00:00Z",
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Sommet annuel du bâtiment durable 2026",
                    body: "Deux jours de conférences et d'ateliers sur la rénovation \
                           énergétique et les matériaux biosourcés.",
                    category: "Conférence",
                    tags: &["sommet", "rénovation"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Annual Green Building Summit 2026",
                    body: "Two days of talks and workshops on energy retrofits and \
                           bio-based materials.",
                    category: "Conference",
                    tags: &["summit", "retrofit"],
                },
                SeedTranslation {
                    language: "ar",
                    title: "القمة السنوية للبناء الأخضر 2026",
                    body: "يومان من المحاضرات وورش العمل حول التجديد الطاقي ومواد البناء الحيوية.",
                    category: "مؤتمر",
                    tags: &["قمة"],
                },
            ],
        ),
        (
            "retrofit-workshop",
            "2026-11-20T14:00:00Z",
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Atelier rénovation énergétique",
                    body: "Atelier pratique : diagnostiquer et prioriser les travaux \
                           d'une rénovation performante.",
                    category: "Atelier",
                    tags: &["rénovation"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Energy Retrofit Workshop",
                    body: "Hands-on workshop: assessing and prioritising the work of a \
                           deep energy retrofit.",
                    category: "Workshop",
                    tags: &["retrofit"],
                },
            ],
        ),
    ];

    for (slug, start_date, translations) in events {
        let id: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO events (slug, status, start_date, location) \
             VALUES ($1, 'published', $2::timestamptz, 'Casablanca') \
             ON CONFLICT (slug) DO NOTHING \
             RETURNING id",
        )
        .bind(slug)
        .bind(start_date)
        .fetch_optional(pool)
        .await?;

        let Some(id) = id else { continue };

        for tr in translations {
            sqlx::query(
                "INSERT INTO event_translations \
                    (event_id, language, title, description, category, tags) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(id)
            .bind(tr.language)
            .bind(tr.title)
            .bind(tr.body)
            .bind(tr.category)
            .bind(collect_tags(tr.tags))
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}

async fn seed_resources(pool: &PgPool) -> Result<(), sqlx::Error> {
    let resources: [(&str, &str, &[SeedTranslation]); 2] = [
        (
            "certification-guide",
            "/files/certification-guide.pdf",
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Guide de certification",
                    body: "Le parcours de certification pas à pas, de la candidature à \
                           l'audit final.",
                    category: "Certification",
                    tags: &["certification", "guide"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Certification Guide",
                    body: "The certification journey step by step, from application to \
                           final audit.",
                    category: "Certification",
                    tags: &["certification", "guide"],
                },
                SeedTranslation {
                    language: "ar",
                    title: "دليل الاعتماد",
                    body: "مسار الاعتماد خطوة بخطوة، من الطلب إلى التدقيق النهائي.",
                    category: "اعتماد",
                    tags: &["اعتماد"],
                },
            ],
        ),
        (
            "energy-audit-checklist",
            "/files/energy-audit-checklist.xlsx",
            &[
                SeedTranslation {
                    language: "fr",
                    title: "Liste de contrôle d'audit énergétique",
                    body: "Points de contrôle pour un audit énergétique de bâtiment tertiaire.",
                    category: "Outils",
                    tags: &["audit", "énergie"],
                },
                SeedTranslation {
                    language: "en",
                    title: "Energy Audit Checklist",
                    body: "Checkpoints for a commercial building energy audit.",
                    category: "Tools",
                    tags: &["audit", "energy"],
                },
            ],
        ),
    ];

    for (slug, file_url, translations) in resources {
        let file_type = file_url.rsplit('.').next();
        let id: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO resources (slug, status, file_url, file_type) \
             VALUES ($1, 'published', $2, $3) \
             ON CONFLICT (slug) DO NOTHING \
             RETURNING id",
        )
        .bind(slug)
        .bind(file_url)
        .bind(file_type)
        .fetch_optional(pool)
        .await?;

        let Some(id) = id else { continue };

        for tr in translations {
            sqlx::query(
                "INSERT INTO resource_translations \
                    (resource_id, language, title, description, resource_type, category, tags) \
                 VALUES ($1, $2, $3, $4, 'document', $5, $6)",
            )
            .bind(id)
            .bind(tr.language)
            .bind(tr.title)
            .bind(tr.body)
            .bind(tr.category)
            .bind(collect_tags(tr.tags))
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}

fn collect_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}
