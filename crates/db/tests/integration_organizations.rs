//! Integration-Tests fuer OrganizationRepository (In-Memory SQLite)

use healthsync_db::{models::NeueOrganisation, OrganizationRepository, SqliteDb};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

#[tokio::test]
async fn leere_tabelle_wird_mit_katalog_befuellt() {
    let db = db().await;

    let liste = db.list().await.unwrap();
    let namen: Vec<_> = liste.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        namen,
        ["Community Clinic A", "General Hospital B", "Independent Practice C"]
    );

    // Zweiter Aufruf spielt nicht erneut ein
    let nochmal = db.list().await.unwrap();
    assert_eq!(nochmal, liste);

    let slugs: Vec<(String,)> = sqlx::query_as("SELECT slug FROM organizations ORDER BY id")
        .fetch_all(db.pool())
        .await
        .unwrap();
    assert_eq!(slugs[1].0, "general-hospital-b");
}

#[tokio::test]
async fn organisation_erstellen() {
    let db = db().await;

    let org = db
        .create(NeueOrganisation {
            name: "Test Clinic",
            slug: "test-clinic",
            admin: "5",
        })
        .await
        .unwrap()
        .expect("dauerhaftes Backend legt Organisation an");

    assert_eq!(org.name, "Test Clinic");
    assert_eq!(org.admin.as_deref(), Some("5"));

    let (admin,): (String,) = sqlx::query_as("SELECT admin FROM organizations WHERE id = ?")
        .bind(org.id.parse::<i64>().unwrap())
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(admin, "5");
}

#[tokio::test]
async fn vorhandene_organisation_verhindert_katalog() {
    let db = db().await;

    db.create(NeueOrganisation {
        name: "Eigene Praxis",
        slug: "eigene-praxis",
        admin: "1",
    })
    .await
    .unwrap();

    let liste = db.list().await.unwrap();
    assert_eq!(liste.len(), 1);
    assert_eq!(liste[0].name, "Eigene Praxis");
}
