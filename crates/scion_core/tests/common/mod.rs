#![allow(dead_code)]

use rusqlite::types::Value;
use rusqlite::Connection;
use scion_core::repo::upsert_repo::table_spec;
use scion_core::EntityKind;

/// Small but complete export touching every collection.
pub const SAMPLE_SGX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ScionPC xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="ScionPC.xsd">
  <Header>
    <Created>
      <Date Type="Exact">
        <StartDate><DateVal><Year>2019</Year><Month>4</Month><Day>2</Day></DateVal></StartDate>
      </Date>
      <Version>5.1</Version>
      <DBInfo>Arnholm</DBInfo>
      <Copyright>none</Copyright>
      <PeopleCount>2</PeopleCount>
      <FamilyCount>1</FamilyCount>
    </Created>
    <Researcher>
      <Contact>
        <SimpleName>Ola Nordmann</SimpleName>
        <AddressLine LineNum="1">Storgata 1</AddressLine>
        <AddressLine LineNum="2">0155 Oslo</AddressLine>
        <Email>ola@example.com</Email>
        <URL>https://example.com</URL>
      </Contact>
    </Researcher>
  </Header>
  <Names>
    <Name ID="NM1" Type="Birth">
      <IsPreferred>true</IsPreferred>
      <PersonID ID="P1"/>
      <Given>Kari</Given>
      <Surname>Arnholm</Surname>
      <Familiar></Familiar>
      <Date Type="Range">
        <StartDate><DateVal><Year>1900</Year><Month></Month><Day></Day></DateVal></StartDate>
        <EndDate><DateVal><Year>1910</Year><Month>12</Month><Day>31</Day></DateVal></EndDate>
      </Date>
      <Title/>
      <DisplayAs>Kari Arnholm</DisplayAs>
    </Name>
    <Name ID="NM2" Type="">
      <IsPreferred>TRUE</IsPreferred>
      <PersonID ID="P2"/>
      <Given>Per</Given>
      <Surname>Arnholm</Surname>
    </Name>
  </Names>
  <PersonalFacts>
    <Fact ID="F1" Type="Birth">
      <ReferenceID ID="P1"/>
      <Place>Bergen</Place>
      <Date Type="Exact">
        <StartDate><DateVal><Modifier>about</Modifier><Year>1887</Year><Month>3</Month><Day>14</Day></DateVal></StartDate>
      </Date>
      <Detail></Detail>
      <NoteID ID="N1"/>
    </Fact>
  </PersonalFacts>
  <FamilyFacts>
    <Fact ID="F2" Type="Marriage">
      <ReferenceID ID="FAM1"/>
      <Place></Place>
      <Date Type=""/>
      <Detail>Church wedding</Detail>
      <NoteID ID=""/>
    </Fact>
  </FamilyFacts>
  <People>
    <Person ID="P1">
      <UserID>U1</UserID>
      <BirthSex></BirthSex>
      <NoteID ID="N1"/>
      <IsPrivate>True</IsPrivate>
      <SourceID ID=""/>
    </Person>
    <Person ID="P2">
      <UserID>U2</UserID>
      <BirthSex>M</BirthSex>
      <NoteID ID=""/>
      <IsPrivate>true</IsPrivate>
      <SourceID ID="S1"/>
    </Person>
  </People>
  <Families>
    <Family ID="FAM1">
      <UserID>UF1</UserID>
      <PrimeID ID="P2"/>
      <PartnerID ID="P1"/>
      <NoteID ID=""/>
    </Family>
  </Families>
  <Children>
    <Child ID="C1">
      <PersonID ID="P3"/>
      <FamilyID ID="FAM1"/>
      <Parent1Relation><Relationship ParentID="P2" Type="Birth"/></Parent1Relation>
      <Parent2Relation><Relationship ParentID="P1" Type="Adopted"/></Parent2Relation>
      <Ordinal>1</Ordinal>
    </Child>
  </Children>
  <Notes>
    <Note ID="N1"><Detail>test note</Detail></Note>
  </Notes>
  <Sources>
    <Source ID="S1">
      <Detail>Parish register</Detail>
      <SourceTitle>Kirkebok</SourceTitle>
      <SourceLocation></SourceLocation>
    </Source>
  </Sources>
  <PersonalAttachments>
    <Attachment ID="A1">
      <ReferenceID ID="P1"/>
      <Filename>kari.jpg</Filename>
      <Fileinfo>image/jpeg</Fileinfo>
      <Detail></Detail>
    </Attachment>
  </PersonalAttachments>
  <FamilyAttachments>
    <Attachment ID="A2">
      <ReferenceID ID="FAM1"/>
      <Filename>wedding.png</Filename>
      <Fileinfo></Fileinfo>
      <Detail>Wedding photo</Detail>
    </Attachment>
  </FamilyAttachments>
</ScionPC>
"#;

/// Every row of every entity table, ordered by table then id.
pub fn dump_tables(conn: &Connection) -> Vec<(String, Vec<Value>)> {
    let mut rows = Vec::new();
    for kind in EntityKind::ALL {
        let table = table_spec(kind).table;
        let mut stmt = conn
            .prepare(&format!("SELECT * FROM {table} ORDER BY id;"))
            .unwrap();
        let column_count = stmt.column_count();
        let mut query = stmt.query([]).unwrap();
        while let Some(row) = query.next().unwrap() {
            let values = (0..column_count)
                .map(|index| row.get::<_, Value>(index).unwrap())
                .collect();
            rows.push((table.to_string(), values));
        }
    }
    rows
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
