//! History and social-science templates. Only TF is authored here; MC and MS
//! resolve to the generic bank.

use super::{Band, TfTemplate};

const TF: &[TfTemplate] = &[
  tf!("Los eventos relacionados con {topic} tuvieron impacto en la sociedad de su época.", true),
  tf!("{Topic} es un tema que solo interesa a los historiadores profesionales.", false),
  tf!("El estudio de {topic} nos ayuda a entender el presente.", true),
  tf!("Los cambios provocados por {topic} fueron inmediatos y sin consecuencias posteriores.", false),
  tf!("{Topic} involucró la participación de diferentes grupos sociales.", true),
  tf!("Podemos aprender lecciones valiosas del estudio de {topic}.", true),
  tf!("{Topic} no tiene ninguna relevancia para nuestra vida actual.", false),
  tf!("El análisis de {topic} requiere considerar múltiples perspectivas.", true),
  tf!("Para estudiar {topic} es importante ubicar los hechos en una línea de tiempo.", true,
    "La cronología permite ordenar y relacionar los acontecimientos."),
  tf!("Las fuentes primarias sobre {topic} son documentos creados en la época estudiada.", true,
    "Cartas, diarios y objetos de la época son fuentes primarias."),
  tf!("{Topic} ocurrió sin ninguna causa ni consecuencia.", false,
    "Todo proceso histórico tiene causas y consecuencias."),
  tf!("Conocer {topic} ayuda a comprender la sociedad actual.", true,
    "El pasado explica muchas características del presente."),
  tf!("Todas las personas que vivieron {topic} lo interpretaron de la misma manera.", false,
    "Distintos actores tienen distintas perspectivas sobre un mismo hecho."),
  tf!("Los mapas pueden ayudar a entender dónde se desarrolló {topic}.", true,
    "El espacio geográfico influye en los procesos históricos."),
  tf!("Una sola fuente basta para conocer todo sobre {topic}.", false,
    "Contrastar varias fuentes da una visión más completa."),
  tf!("Los historiadores analizan evidencias para explicar {topic}.", true,
    "La historia se construye a partir del análisis de evidencias."),
];

pub static BANDS: &[Band] = &[Band { min: 1, max: 5, tf: TF, mc: &[], ms: &[] }];

const TF_EN: &[TfTemplate] = &[
  tf!("The events related to {topic} had an impact on the society of their time.", true),
  tf!("{Topic} is a subject that only interests professional historians.", false),
  tf!("Studying {topic} helps us understand the present.", true),
  tf!("The changes brought about by {topic} were immediate and had no later consequences.", false),
  tf!("{Topic} involved the participation of different social groups.", true),
  tf!("We can learn valuable lessons from studying {topic}.", true),
  tf!("{Topic} has no relevance at all to our lives today.", false),
  tf!("Analyzing {topic} requires considering multiple perspectives.", true),
  tf!("Primary sources about {topic} are documents created during the period studied.", true,
    "Letters, diaries and objects from the period are primary sources."),
  tf!("A single source is enough to know everything about {topic}.", false,
    "Comparing several sources gives a more complete picture."),
];

pub static BANDS_EN: &[Band] = &[Band { min: 1, max: 5, tf: TF_EN, mc: &[], ms: &[] }];
