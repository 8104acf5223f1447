use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Top-level categories: (name, name_en, name_zh, name_ja)
const ROOT_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("수처리·환경", "Water Treatment & Environment", "水处理·环境", "水処理・環境"),
    ("기계·장비", "Machinery & Equipment", "机械·设备", "機械・装置"),
    ("전기·전자", "Electrical & Electronics", "电气·电子", "電気・電子"),
    ("화학·소재", "Chemicals & Materials", "化学·材料", "化学・素材"),
    ("에너지", "Energy", "能源", "エネルギー"),
    ("바이오·의료", "Bio & Medical", "生物·医疗", "バイオ・医療"),
];

/// Second-level categories: (parent name, name, name_en)
const CHILD_CATEGORIES: &[(&str, &str, &str)] = &[
    ("수처리·환경", "담수화", "Desalination"),
    ("수처리·환경", "수처리 설비", "Water Treatment Plants"),
    ("수처리·환경", "폐수 처리", "Wastewater Treatment"),
    ("기계·장비", "펌프·밸브", "Pumps & Valves"),
    ("기계·장비", "산업용 로봇", "Industrial Robots"),
    ("전기·전자", "반도체 장비", "Semiconductor Equipment"),
    ("화학·소재", "분리막", "Membranes"),
    ("에너지", "태양광", "Solar Power"),
    ("바이오·의료", "의료기기", "Medical Devices"),
];

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, name_en, name_zh, name_ja) in ROOT_CATEGORIES {
            let sql = format!(
                "INSERT INTO technology_categories (name, name_en, name_zh, name_ja, level) \
                 VALUES ({}, {}, {}, {}, 1)",
                quote(name),
                quote(name_en),
                quote(name_zh),
                quote(name_ja)
            );
            db.execute_unprepared(&sql).await?;
        }

        // Children resolve their parent by name so ids never need to be fixed
        for (parent, name, name_en) in CHILD_CATEGORIES {
            let sql = format!(
                "INSERT INTO technology_categories (parent_id, name, name_en, level) \
                 SELECT id, {}, {}, 2 FROM technology_categories WHERE name = {} AND level = 1",
                quote(name),
                quote(name_en),
                quote(parent)
            );
            db.execute_unprepared(&sql).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM technology_categories")
            .await?;

        Ok(())
    }
}
